//! File conventions used by the checks.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_task_extension() -> String {
    String::from("json")
}

fn default_audio_extension() -> String {
    String::from("wav")
}

/// Number of directories between the speech root and a clip
/// (`<age>/<subject>/<topic>`).
const fn default_topic_depth() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Extension of task-definition files, without the dot.
    #[serde(default = "default_task_extension")]
    pub task_extension: String,

    /// Extension of speech clips, without the dot.
    #[serde(default = "default_audio_extension")]
    pub audio_extension: String,

    /// Directory depth of a topic below the speech root.
    #[serde(default = "default_topic_depth")]
    pub topic_depth: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            task_extension: default_task_extension(),
            audio_extension: default_audio_extension(),
            topic_depth: default_topic_depth(),
        }
    }
}

impl CheckConfig {
    /// Strip a leading dot from the configured extensions.
    pub fn normalize(&mut self) {
        if let Some(ext) = self.task_extension.strip_prefix('.') {
            self.task_extension = ext.to_string();
        }
        if let Some(ext) = self.audio_extension.strip_prefix('.') {
            self.audio_extension = ext.to_string();
        }
    }

    /// Reject values that would make every check vacuous.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty extension or a zero
    /// topic depth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.task_extension.is_empty() {
            return Err(invalid("check.task_extension", "must not be empty"));
        }
        if self.audio_extension.is_empty() {
            return Err(invalid("check.audio_extension", "must not be empty"));
        }
        if self.topic_depth == 0 {
            return Err(invalid("check.topic_depth", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
