//! Asset collector: indexes speech clips under the speech root.
//!
//! A clip belongs to a topic only when it sits exactly `topic_depth`
//! directories below the root: `<age>/<subject>/<topic>/<stem>.wav`.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use sov_core::EntryKey;
use sov_core::keys::slash_path;

use crate::error::CheckError;
use crate::layout::ContentLayout;
use crate::walk::files_with_extension;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    keys: BTreeSet<EntryKey>,
    unexpected: Vec<String>,
}

impl AssetIndex {
    #[must_use]
    pub const fn keys(&self) -> &BTreeSet<EntryKey> {
        &self.keys
    }

    /// Clips at the wrong depth, relative to the speech root, in walk order.
    #[must_use]
    pub fn unexpected(&self) -> &[String] {
        &self.unexpected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Classify one clip path relative to the speech root.
    pub fn insert_relative(&mut self, relative: &Path, topic_depth: usize) {
        match key_for(relative, topic_depth) {
            Some(key) => {
                self.keys.insert(key);
            }
            None => {
                let shown = slash_path(relative);
                tracing::debug!(path = %shown, "unexpected audio path structure");
                self.unexpected.push(shown);
            }
        }
    }
}

fn key_for(relative: &Path, topic_depth: usize) -> Option<EntryKey> {
    let parts = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    if parts.len() != topic_depth + 1 {
        return None;
    }

    let stem = relative.file_stem()?.to_string_lossy().into_owned();
    Some(EntryKey::new(parts[..topic_depth].join("/"), stem))
}

/// Walk the speech root and index every clip.
///
/// A missing speech root is not an error: audio may not be recorded yet.
///
/// # Errors
///
/// Returns [`CheckError::Walk`] if an existing directory cannot be read.
pub fn collect_assets(layout: &ContentLayout) -> Result<AssetIndex, CheckError> {
    let root = layout.speech_path();
    let mut index = AssetIndex::default();

    if !root.is_dir() {
        tracing::debug!(path = %root.display(), "speech directory not found, no assets");
        return Ok(index);
    }

    for relative in files_with_extension(&root, &layout.audio_extension)? {
        index.insert_relative(&relative, layout.topic_depth);
    }

    tracing::debug!(
        clips = index.len(),
        unexpected = index.unexpected.len(),
        "indexed speech clips"
    );
    Ok(index)
}
