//! Record sources
//!
//! The renderer never decides where records come from; a source is injected
//! instead. Plain closures returning `Vec<Record>` are sources too.

pub mod static_source;
pub mod json_source;

pub use static_source::StaticSource;
pub use json_source::JsonSource;

use crate::errors::TableError;
use crate::models::Record;

/// Provider of the ordered records to display
pub trait RecordSource {
    /// Fetch the current records, in display order
    fn fetch_records(&self) -> Result<Vec<Record>, TableError>;
}

impl<F> RecordSource for F
where
    F: Fn() -> Vec<Record>,
{
    fn fetch_records(&self) -> Result<Vec<Record>, TableError> {
        Ok(self())
    }
}
