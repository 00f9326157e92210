//! JSON Schemas for the input document formats.
//!
//! Schemas are generated from the entity types with [`schemars::schema_for!`],
//! so they always describe exactly what the loader accepts.

use schemars::schema_for;

use crate::entities::{Curriculum, TaskFile};

/// Names accepted by [`schema_for_name`], in display order.
pub const SCHEMA_NAMES: &[&str] = &["task-file", "curriculum"];

/// Look up the JSON Schema for a document format by name.
///
/// Underscores are accepted in place of hyphens.
#[must_use]
pub fn schema_for_name(name: &str) -> Option<serde_json::Value> {
    let schema = match name.replace('_', "-").as_str() {
        "task-file" => schema_for!(TaskFile),
        "curriculum" => schema_for!(Curriculum),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_for_name(name).expect("listed schema should exist");
            assert!(schema.is_object(), "{name} schema should be an object");
        }
    }

    #[test]
    fn underscore_alias_resolves() {
        assert!(schema_for_name("task_file").is_some());
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(schema_for_name("puzzles").is_none());
    }

    #[test]
    fn curriculum_schema_uses_camel_case_keys() {
        let schema = schema_for_name("curriculum").unwrap();
        let text = schema.to_string();
        assert!(text.contains("ageGroups"));
        assert!(text.contains("taskFile"));
        assert!(text.contains("taskCount"));
    }
}
