//! Input document models.
//!
//! Both document kinds are JSON files inside the content tree. Unknown fields
//! are ignored so the validator keeps working as the player app grows new
//! task attributes.

mod curriculum;
mod task;

pub use curriculum::{AgeGroup, Curriculum, Subject, TaskCount, Topic};
pub use task::{Task, TaskFile};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::CoreError;

/// Read and parse a JSON document from `path`.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read and
/// [`CoreError::Parse`] if its contents do not match `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
