use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::Commands;

/// Top-level CLI parser for the `sov-validate` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sov-validate",
    version,
    about = "Sovyonok - curriculum, task, and speech asset consistency checker"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (print only the result)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via data/curriculum.json or .sovyonok)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            project: self.project.clone(),
        }
    }
}
