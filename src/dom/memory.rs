//! In-memory containers
//!
//! Stand-ins for DOM elements when rendering outside a browser, e.g. to
//! produce markup server-side or in native tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Container, ContainerHost};

/// Shared, mutable content buffer
///
/// Clones share the same buffer, mirroring how two handles to one DOM
/// element observe the same content.
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
    content: Rc<RefCell<String>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl Container for MemoryContainer {
    fn replace_content(&self, markup: &str) {
        *self.content.borrow_mut() = markup.to_string();
    }
}

/// Set of named in-memory containers
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    containers: HashMap<String, MemoryContainer>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container under `id`, returning a handle to it
    pub fn add_container(&mut self, id: impl Into<String>) -> MemoryContainer {
        self.containers.entry(id.into()).or_default().clone()
    }
}

impl ContainerHost for MemoryHost {
    type Handle = MemoryContainer;

    fn find_container(&self, id: &str) -> Option<MemoryContainer> {
        self.containers.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::resolve_container;
    use crate::errors::TableError;

    #[test]
    fn test_replace_overwrites() {
        let container = MemoryContainer::new();
        container.replace_content("<tr></tr>");
        container.replace_content("x");
        assert_eq!(container.content(), "x");
    }

    #[test]
    fn test_handles_share_content() {
        let mut host = MemoryHost::new();
        let handle = host.add_container("Needle-data");
        let found = resolve_container(&host, "Needle-data").unwrap();

        found.replace_content("rows");
        assert_eq!(handle.content(), "rows");
    }

    #[test]
    fn test_missing_container() {
        let host = MemoryHost::new();
        let err = resolve_container(&host, "Needle-data").unwrap_err();
        assert_eq!(err, TableError::ContainerNotFound("Needle-data".to_string()));
    }
}
