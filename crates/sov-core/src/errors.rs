//! Cross-cutting error types for the validator.
//!
//! Consistency discrepancies are never errors; they are reported as
//! [`crate::Issue`] values. Errors here mean the content tree itself could
//! not be read.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading content documents.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not a valid document of the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
