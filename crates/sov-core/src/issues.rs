//! Consistency issues found by the checks.
//!
//! Issues are soft failures: they are collected, printed, and counted toward
//! the exit status, but never abort a run.

use std::fmt;

use serde::Serialize;

use crate::entities::TaskCount;
use crate::keys::EntryKey;

/// Which check produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Manifest references, task counts, and orphan task files.
    Curriculum,
    /// A task without its speech clip.
    MissingAudio,
    /// A speech clip without its task.
    OrphanAudio,
}

impl IssueCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curriculum => "curriculum",
            Self::MissingAudio => "missing_audio",
            Self::OrphanAudio => "orphan_audio",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single discrepancy between the manifest, the task files, and the audio tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A manifest topic that names no task file.
    TopicWithoutTaskFile {
        age_group: String,
        subject: String,
        topic: String,
    },

    /// A manifest topic whose task file is not on disk.
    TaskFileMissing { task_file: String },

    /// A task file whose parsed task count differs from the manifest.
    TaskCountMismatch {
        task_file: String,
        declared: TaskCount,
        actual: usize,
    },

    /// A task file on disk that no manifest topic references.
    OrphanTaskFile { task_file: String },

    /// A task whose speech clip is absent.
    MissingAudio {
        key: EntryKey,
        path: String,
        question: String,
    },

    /// A speech clip whose task is absent.
    OrphanAudio { key: EntryKey, path: String },
}

impl Issue {
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        match self {
            Self::TopicWithoutTaskFile { .. }
            | Self::TaskFileMissing { .. }
            | Self::TaskCountMismatch { .. }
            | Self::OrphanTaskFile { .. } => IssueCategory::Curriculum,
            Self::MissingAudio { .. } => IssueCategory::MissingAudio,
            Self::OrphanAudio { .. } => IssueCategory::OrphanAudio,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopicWithoutTaskFile {
                age_group,
                subject,
                topic,
            } => write!(
                f,
                "CURRICULUM: Topic {age_group}/{subject}/{topic} has no taskFile"
            ),
            Self::TaskFileMissing { task_file } => {
                write!(f, "CURRICULUM: taskFile '{task_file}' does not exist on disk")
            }
            Self::TaskCountMismatch {
                task_file,
                declared,
                actual,
            } => write!(
                f,
                "CURRICULUM: {task_file} taskCount={declared} but actual={actual}"
            ),
            Self::OrphanTaskFile { task_file } => write!(
                f,
                "ORPHAN TASK FILE: {task_file} exists on disk but not referenced in curriculum"
            ),
            Self::MissingAudio { path, .. } => write!(f, "MISSING: {path}"),
            Self::OrphanAudio { path, .. } => write!(f, "ORPHAN: {path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn curriculum_messages_name_the_file() {
        let mismatch = Issue::TaskCountMismatch {
            task_file: "age3/speech/s01.json".into(),
            declared: 3_usize.into(),
            actual: 2,
        };
        assert_eq!(
            mismatch.to_string(),
            "CURRICULUM: age3/speech/s01.json taskCount=3 but actual=2"
        );

        let missing = Issue::TaskFileMissing {
            task_file: "age3/speech/s09.json".into(),
        };
        assert_eq!(
            missing.to_string(),
            "CURRICULUM: taskFile 'age3/speech/s09.json' does not exist on disk"
        );

        let no_file = Issue::TopicWithoutTaskFile {
            age_group: "age3".into(),
            subject: "speech".into(),
            topic: "s04".into(),
        };
        assert_eq!(
            no_file.to_string(),
            "CURRICULUM: Topic age3/speech/s04 has no taskFile"
        );
    }

    #[test]
    fn categories_group_variants() {
        let orphan_file = Issue::OrphanTaskFile {
            task_file: "x.json".into(),
        };
        let missing = Issue::MissingAudio {
            key: EntryKey::new("a/b/c", "c_01"),
            path: "assets/speech/a/b/c/c_01.wav".into(),
            question: String::new(),
        };
        let orphan = Issue::OrphanAudio {
            key: EntryKey::new("a/b/c", "c_09"),
            path: "assets/speech/a/b/c/c_09.wav".into(),
        };

        assert_eq!(orphan_file.category(), IssueCategory::Curriculum);
        assert_eq!(missing.category(), IssueCategory::MissingAudio);
        assert_eq!(orphan.category(), IssueCategory::OrphanAudio);
        assert_eq!(missing.to_string(), "MISSING: assets/speech/a/b/c/c_01.wav");
        assert_eq!(orphan.to_string(), "ORPHAN: assets/speech/a/b/c/c_09.wav");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let issue = Issue::OrphanTaskFile {
            task_file: "age5/logic/l01.json".into(),
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["kind"], "orphan_task_file");
        assert_eq!(value["task_file"], "age5/logic/l01.json");
    }
}
