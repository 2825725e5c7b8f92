//! Table renderer
//!
//! Converts records into row markup and writes it as the full content of a
//! container. Each call replaces whatever an earlier call left behind.

use crate::dom::{resolve_container, Container, ContainerHost};
use crate::errors::TableError;
use crate::html_table::render_rows;
use crate::models::Record;
use crate::sources::RecordSource;

/// Render `records` into `container`, returning the number of rows written
pub fn render<C: Container + ?Sized>(records: &[Record], container: &C) -> usize {
    let markup = render_rows(records);
    container.replace_content(&markup);
    log::debug!("rendered {} rows ({} bytes)", records.len(), markup.len());
    records.len()
}

/// Renderer bound to an injected record source
pub struct TableRenderer<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> TableRenderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch records from the source and render them into `container`
    pub fn refresh<C: Container + ?Sized>(&self, container: &C) -> Result<usize, TableError> {
        let records = self.source.fetch_records()?;
        Ok(render(&records, container))
    }

    /// Resolve the container by id, then refresh it
    ///
    /// A missing container fails before the source is consulted.
    pub fn poll<H: ContainerHost + ?Sized>(&self, host: &H, id: &str) -> Result<usize, TableError> {
        let container = resolve_container(host, id)?;
        self.refresh(&container)
    }
}
