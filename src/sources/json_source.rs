//! JSON payload source
//!
//! Accepts either a record array (`[{"category": "c1", "count": 5}, ...]`,
//! legacy `type`/`num` names included) or a detector count map keyed by class
//! index (`{"0": 3, "4": 1}`), which is resolved against a class list.

use std::collections::{BTreeMap, HashMap};

use crate::errors::TableError;
use crate::models::{records_from_class_counts, Record, NEEDLE_CLASSES};

use super::RecordSource;

/// Source that decodes records from a JSON document
#[derive(Clone, Debug)]
pub struct JsonSource {
    json: String,
    classes: &'static [&'static str],
}

impl JsonSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            classes: NEEDLE_CLASSES,
        }
    }

    /// Use a different class list for index-keyed payloads
    pub fn with_classes(mut self, classes: &'static [&'static str]) -> Self {
        self.classes = classes;
        self
    }
}

impl RecordSource for JsonSource {
    fn fetch_records(&self) -> Result<Vec<Record>, TableError> {
        // Objects are count maps; anything else decodes as a record array so
        // serde reports the field-level cause.
        if self.json.trim_start().starts_with('{') {
            let raw: BTreeMap<String, u64> = serde_json::from_str(&self.json)?;
            let counts = parse_class_indices(raw)?;
            Ok(records_from_class_counts(self.classes, &counts))
        } else {
            Ok(serde_json::from_str::<Vec<Record>>(&self.json)?)
        }
    }
}

/// Convert string class keys (as JSON objects require) to indices
///
/// Keys naming the same index (`"1"` and `"01"`) are rejected.
pub(crate) fn parse_class_indices(
    raw: BTreeMap<String, u64>,
) -> Result<HashMap<usize, u64>, TableError> {
    let mut counts = HashMap::with_capacity(raw.len());
    for (key, count) in raw {
        let idx = key.parse::<usize>().map_err(|_| {
            TableError::InvalidPayload(format!("class index '{}' is not a number", key))
        })?;
        if counts.insert(idx, count).is_some() {
            return Err(TableError::InvalidPayload(format!(
                "duplicate class index {} (key '{}')",
                idx, key
            )));
        }
    }
    Ok(counts)
}
