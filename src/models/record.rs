//! Table record
//!
//! A record is one row of the counts table: a short category code and a
//! non-negative count. Records carry no identity beyond their position.

use serde::{Deserialize, Serialize};

/// One category/count pair
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Category code (e.g. "c1")
    #[serde(alias = "type")]
    pub category: String,

    /// Number of items seen in this category
    #[serde(alias = "num")]
    pub count: u64,
}

impl Record {
    /// Create a new record
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// Fixed sample data shown before a live source is wired in
pub fn mock_records() -> Vec<Record> {
    [
        ("c1", 5),
        ("c2", 2),
        ("c3", 7),
        ("c4", 2),
        ("h2", 3),
        ("g5", 7),
        ("c9", 1),
        ("d2", 2),
        ("f5", 5),
    ]
    .into_iter()
    .map(|(category, count)| Record::new(category, count))
    .collect()
}
