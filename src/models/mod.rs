//! Data models for the needle count table

pub mod record;
pub mod needle_classes;

pub use record::{mock_records, Record};
pub use needle_classes::{records_from_class_counts, NEEDLE_CLASSES};
