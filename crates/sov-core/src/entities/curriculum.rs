use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The curriculum manifest (`data/curriculum.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    #[serde(default)]
    pub age_groups: Vec<AgeGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgeGroup {
    pub id: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// A topic entry. `task_file` is relative to the task root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_file: Option<String>,
    #[serde(default)]
    #[schemars(with = "u32")]
    pub task_count: TaskCount,
}

impl Topic {
    /// The referenced task file, treating an empty string as absent.
    #[must_use]
    pub fn task_file(&self) -> Option<&str> {
        self.task_file.as_deref().filter(|path| !path.is_empty())
    }
}

/// Declared number of tasks, kept as written in the manifest.
///
/// Authors occasionally write `null`, `2.0` or a string here. Such values are
/// not parse errors: an integral number still counts, anything else never
/// matches and shows up as a count mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCount(Value);

impl TaskCount {
    /// The count as a whole number, if it is one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_usize(&self) -> Option<usize> {
        let Value::Number(number) = &self.0 else {
            return None;
        };
        let whole = number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .filter(|value| (0.0..=f64::from(u32::MAX)).contains(value))
                .map(|value| value as u64)
        })?;
        usize::try_from(whole).ok()
    }

    #[must_use]
    pub fn matches(&self, actual: usize) -> bool {
        self.as_usize() == Some(actual)
    }
}

impl Default for TaskCount {
    fn default() -> Self {
        Self::from(0)
    }
}

impl From<usize> for TaskCount {
    fn from(count: usize) -> Self {
        Self(Value::from(count))
    }
}

impl From<Value> for TaskCount {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}
