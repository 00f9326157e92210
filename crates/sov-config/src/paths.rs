//! Content tree locations, relative to the project root.

use serde::{Deserialize, Serialize};

fn default_curriculum_file() -> String {
    String::from("data/curriculum.json")
}

fn default_tasks_dir() -> String {
    String::from("data/tasks")
}

fn default_speech_dir() -> String {
    String::from("assets/speech")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Curriculum manifest.
    #[serde(default = "default_curriculum_file")]
    pub curriculum_file: String,

    /// Root of the task-definition tree.
    #[serde(default = "default_tasks_dir")]
    pub tasks_dir: String,

    /// Root of the speech audio tree. May be absent on disk.
    #[serde(default = "default_speech_dir")]
    pub speech_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            curriculum_file: default_curriculum_file(),
            tasks_dir: default_tasks_dir(),
            speech_dir: default_speech_dir(),
        }
    }
}
