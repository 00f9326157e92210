use clap::{Args, Subcommand};

/// Top-level command tree. Running with no subcommand means `check`.
#[derive(Clone, Debug, Default, Subcommand)]
pub enum Commands {
    /// Validate the curriculum, task files, and speech clips.
    #[default]
    Check,
    /// Print the JSON Schema of an input document format.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document format: task-file or curriculum
    pub type_name: String,
}
