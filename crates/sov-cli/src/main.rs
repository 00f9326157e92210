use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sov_config::SovConfig;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("sov-validate error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cli = cli::Cli::parse();
    let (quiet, verbose) = (cli.quiet, cli.verbose);
    let flags = cli.global_flags();

    match cli.command.unwrap_or_default() {
        cli::Commands::Schema(args) => {
            init_tracing(quiet, verbose)?;
            commands::schema::handle(&args)?;
            Ok(0)
        }
        cli::Commands::Check => {
            let project_root = resolve_project_root(flags.project.as_deref())?;
            // `.env` may set SOVYONOK_LOG, so it must be loaded before the subscriber.
            let dotenv = SovConfig::load_dotenv(&project_root);
            init_tracing(quiet, verbose)?;
            tracing::debug!(loaded = dotenv, "project .env");

            if !context::is_project_root(&project_root) {
                tracing::warn!(
                    path = %project_root.display(),
                    "--project has no data/curriculum.json or .sovyonok directory"
                );
            }

            let config = SovConfig::load(&project_root)
                .context("failed to load sovyonok configuration")?;
            commands::check::handle(&project_root, &config, &flags)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOVYONOK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start).context(
        "not a sovyonok project (no data/curriculum.json or .sovyonok directory found). \
         Run from inside the project or pass --project.",
    )
}
