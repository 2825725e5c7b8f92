//! Detector class list
//!
//! The needle detector reports counts keyed by class index. These helpers
//! turn such a map into table records, one per known class.

use std::collections::HashMap;

use super::Record;

/// Class names in detector index order
pub const NEEDLE_CLASSES: &[&str] = &[
    "BV75-4",
    "C-1",
    "CT-1",
    "CT-1 plus",
    "CTX",
    "CV-3",
    "CV-5",
    "FS-2",
    "MH plus",
    "P-3",
    "UR-6",
];

/// Build one record per class name, in class order
///
/// Classes with no entry in `counts` get a count of zero. Indices past the
/// end of `names` are ignored.
pub fn records_from_class_counts(names: &[&str], counts: &HashMap<usize, u64>) -> Vec<Record> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Record::new(*name, counts.get(&idx).copied().unwrap_or(0)))
        .collect()
}
