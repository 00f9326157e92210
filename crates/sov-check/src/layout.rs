//! Resolved locations and conventions of one content tree.

use std::path::{Path, PathBuf};

use sov_config::SovConfig;
use sov_core::keys::slash_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    pub root: PathBuf,
    /// Manifest path, relative to `root`.
    pub curriculum_file: PathBuf,
    /// Task tree, relative to `root`.
    pub tasks_dir: PathBuf,
    /// Speech tree, relative to `root`.
    pub speech_dir: PathBuf,
    pub task_extension: String,
    pub audio_extension: String,
    pub topic_depth: usize,
}

impl ContentLayout {
    #[must_use]
    pub fn from_config(root: &Path, config: &SovConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            curriculum_file: PathBuf::from(&config.paths.curriculum_file),
            tasks_dir: PathBuf::from(&config.paths.tasks_dir),
            speech_dir: PathBuf::from(&config.paths.speech_dir),
            task_extension: config.check.task_extension.clone(),
            audio_extension: config.check.audio_extension.clone(),
            topic_depth: config.check.topic_depth,
        }
    }

    /// Layout with the default conventions rooted at `root`.
    #[must_use]
    pub fn with_defaults(root: &Path) -> Self {
        Self::from_config(root, &SovConfig::default())
    }

    #[must_use]
    pub fn curriculum_path(&self) -> PathBuf {
        self.root.join(&self.curriculum_file)
    }

    #[must_use]
    pub fn tasks_path(&self) -> PathBuf {
        self.root.join(&self.tasks_dir)
    }

    #[must_use]
    pub fn speech_path(&self) -> PathBuf {
        self.root.join(&self.speech_dir)
    }

    /// Speech root as printed in reports, relative to the project root.
    #[must_use]
    pub fn speech_display(&self) -> String {
        slash_path(&self.speech_dir)
    }

    /// Manifest name as printed in reports.
    #[must_use]
    pub fn curriculum_display(&self) -> String {
        self.curriculum_file
            .file_name()
            .map_or_else(|| slash_path(&self.curriculum_file), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_layout_resolves_under_root() {
        let layout = ContentLayout::with_defaults(Path::new("/proj"));
        assert_eq!(layout.curriculum_path(), PathBuf::from("/proj/data/curriculum.json"));
        assert_eq!(layout.tasks_path(), PathBuf::from("/proj/data/tasks"));
        assert_eq!(layout.speech_path(), PathBuf::from("/proj/assets/speech"));
        assert_eq!(layout.speech_display(), "assets/speech");
        assert_eq!(layout.curriculum_display(), "curriculum.json");
    }

    #[test]
    fn layout_follows_config() {
        let mut config = SovConfig::default();
        config.paths.speech_dir = "media/voice".into();
        config.check.audio_extension = "ogg".into();
        config.check.topic_depth = 2;

        let layout = ContentLayout::from_config(Path::new("/proj"), &config);
        assert_eq!(layout.speech_display(), "media/voice");
        assert_eq!(layout.audio_extension, "ogg");
        assert_eq!(layout.topic_depth, 2);
    }
}
