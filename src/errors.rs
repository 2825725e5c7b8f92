//! Error types for table rendering
//!
//! Rendering rows into a container cannot fail once a handle exists; the
//! only lookup failure is a missing container. The remaining variants cover
//! record sources and the standalone page template.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Named container element is absent from the host document
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    /// Record payload could not be decoded
    #[error("Invalid record payload: {0}")]
    InvalidPayload(String),

    /// Page template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::InvalidPayload(err.to_string())
    }
}

impl From<mustache::Error> for TableError {
    fn from(err: mustache::Error) -> Self {
        TableError::Template(err.to_string())
    }
}
