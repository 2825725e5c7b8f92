//! Fixed in-memory source

use crate::errors::TableError;
use crate::models::{mock_records, Record};

use super::RecordSource;

/// Source that always yields the same records
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Source backed by the built-in sample data
    pub fn mock() -> Self {
        Self::new(mock_records())
    }
}

impl RecordSource for StaticSource {
    fn fetch_records(&self) -> Result<Vec<Record>, TableError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_is_repeatable() {
        let source = StaticSource::new(vec![Record::new("c1", 5), Record::new("c2", 2)]);
        let first = source.fetch_records().unwrap();
        let second = source.fetch_records().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[1].category, "c2");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(StaticSource::default().fetch_records().unwrap().is_empty());
    }
}
