use anyhow::bail;
use sov_core::schema::{SCHEMA_NAMES, schema_for_name};

use crate::cli::root_commands::SchemaArgs;

/// Handle `sov-validate schema <type>`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let Some(schema) = schema_for_name(&args.type_name) else {
        bail!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
