//! Validate realistic content documents against the generated JSON Schemas.

use sov_core::schema::schema_for_name;

/// Validate a JSON value against a named schema, returning error messages.
fn validate(schema_name: &str, instance: &serde_json::Value) -> Vec<String> {
    let schema = schema_for_name(schema_name).expect("schema should exist");
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn task_file_document_is_valid() {
    let doc = serde_json::json!({
        "tasks": [
            { "id": "s01_01", "question": "Who says moo?", "type": "choice" },
            { "id": "s01_02", "question": "Who says woof?" }
        ]
    });
    let errors = validate("task-file", &doc);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn task_without_id_is_invalid() {
    let doc = serde_json::json!({ "tasks": [{ "question": "?" }] });
    assert!(!validate("task-file", &doc).is_empty());
}

#[test]
fn curriculum_document_is_valid() {
    let doc = serde_json::json!({
        "ageGroups": [{
            "id": "age3",
            "subjects": [{
                "id": "speech",
                "topics": [
                    { "id": "s01", "taskFile": "age3/speech/s01.json", "taskCount": 2 },
                    { "id": "s02" }
                ]
            }]
        }]
    });
    let errors = validate("curriculum", &doc);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn negative_task_count_is_invalid() {
    let doc = serde_json::json!({
        "ageGroups": [{
            "id": "age3",
            "subjects": [{
                "id": "speech",
                "topics": [{ "id": "s01", "taskFile": "age3/speech/s01.json", "taskCount": -1 }]
            }]
        }]
    });
    assert!(!validate("curriculum", &doc).is_empty());
}

#[test]
fn schema_and_loader_agree_on_documents() {
    let doc = serde_json::json!({
        "tasks": [{ "id": "m01_01", "question": "How many apples?" }]
    });
    assert!(validate("task-file", &doc).is_empty());

    let parsed: sov_core::entities::TaskFile =
        serde_json::from_value(doc).expect("loader should accept schema-valid document");
    assert_eq!(parsed.tasks[0].id, "m01_01");
}
