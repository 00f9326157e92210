use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A single exercise inside a topic's task file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    /// Identifier, unique within its topic. Also the expected audio file stem.
    pub id: String,
    /// Prompt spoken to the child. Only used to make reports readable.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub question: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Contents of one task-definition file (`data/tasks/<age>/<subject>/<topic>.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskFile {
    #[serde(default)]
    pub tasks: Vec<Task>,
}
