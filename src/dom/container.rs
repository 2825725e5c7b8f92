//! Container traits and their web-sys implementations

use crate::errors::TableError;

/// Element whose whole content can be replaced with markup
pub trait Container {
    /// Replace all existing content with `markup`
    fn replace_content(&self, markup: &str);
}

/// Environment able to look up containers by element id
pub trait ContainerHost {
    type Handle: Container;

    fn find_container(&self, id: &str) -> Option<Self::Handle>;
}

/// Look up a container, failing if the host has no element with that id
pub fn resolve_container<H: ContainerHost + ?Sized>(
    host: &H,
    id: &str,
) -> Result<H::Handle, TableError> {
    host.find_container(id)
        .ok_or_else(|| TableError::ContainerNotFound(id.to_string()))
}

impl<C: Container + ?Sized> Container for &C {
    fn replace_content(&self, markup: &str) {
        (**self).replace_content(markup)
    }
}

impl Container for web_sys::Element {
    fn replace_content(&self, markup: &str) {
        self.set_inner_html(markup);
    }
}

impl ContainerHost for web_sys::Document {
    type Handle = web_sys::Element;

    fn find_container(&self, id: &str) -> Option<web_sys::Element> {
        self.get_element_by_id(id)
    }
}
