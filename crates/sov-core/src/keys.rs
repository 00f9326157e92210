//! Entry keys shared by the task index and the audio index.
//!
//! A topic is named by its task-file path relative to the task root, without
//! the extension and with `/` separators (`age3/speech/s01`). Audio files live
//! under the same topic path, so a task and its speech clip share a key.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// `(topic path, stem)` pair. Ordered by topic, then stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryKey {
    pub topic: String,
    pub stem: String,
}

impl EntryKey {
    #[must_use]
    pub fn new(topic: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            stem: stem.into(),
        }
    }

    /// Path of the file this key names below `root`, e.g.
    /// `assets/speech/age3/speech/s01/s01_02.wav`.
    #[must_use]
    pub fn file_path(&self, root: &str, extension: &str) -> String {
        let root = root.trim_end_matches('/');
        if root.is_empty() {
            format!("{}/{}.{extension}", self.topic, self.stem)
        } else {
            format!("{root}/{}/{}.{extension}", self.topic, self.stem)
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.topic, self.stem)
    }
}

/// Join the normal components of a relative path with `/`.
///
/// Keys must not depend on the host separator, otherwise task keys and audio
/// keys built on Windows would never match the manifest's `/` paths.
#[must_use]
pub fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
