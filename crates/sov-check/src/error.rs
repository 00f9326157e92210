//! Check error types.
//!
//! Only unreadable input is an error. Discrepancies are [`sov_core::Issue`]s.

use std::path::PathBuf;

use sov_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A task file or the manifest could not be read or parsed.
    #[error(transparent)]
    Document(#[from] CoreError),

    /// Directory traversal failed.
    #[error("failed to walk {}: {message}", root.display())]
    Walk { root: PathBuf, message: String },
}
