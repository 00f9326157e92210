use std::path::{Path, PathBuf};

use sov_config::{PROJECT_DIR, PathsConfig};

/// A directory is a project root if it holds `.sovyonok/` or the default
/// curriculum manifest.
#[must_use]
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(PROJECT_DIR).is_dir() || dir.join(PathsConfig::default().curriculum_file).is_file()
}

/// Walk upwards from `start` until a project root is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if is_project_root(&current) {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
