//! Deterministic file enumeration over a content directory.
//!
//! Uses the `ignore` crate with every standard filter disabled: content trees
//! are not source trees, so `.gitignore` rules and hidden-file skipping must
//! not hide a task file or a clip from the checks.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::CheckError;

/// All files below `root` whose extension is exactly `extension`, as paths
/// relative to `root`, in sorted order.
///
/// Symlinked files count as files; symlinked directories are not descended.
///
/// # Errors
///
/// Returns [`CheckError::Walk`] if a directory cannot be read.
pub fn files_with_extension(root: &Path, extension: &str) -> Result<Vec<PathBuf>, CheckError> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.sort_by_file_path(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|e: ignore::Error| walk_error(root, &e))?;
        let path = entry.path();
        if !path.is_file() || !path.extension().is_some_and(|ext| ext == extension) {
            continue;
        }
        let relative = path
            .strip_prefix(root)
            .map_err(|e| walk_error(root, &e))?;
        files.push(relative.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn walk_error(root: &Path, error: &dyn std::fmt::Display) -> CheckError {
    CheckError::Walk {
        root: root.to_path_buf(),
        message: error.to_string(),
    }
}
