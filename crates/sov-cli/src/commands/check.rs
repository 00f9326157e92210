use std::path::Path;

use anyhow::Context;
use sov_check::assets::collect_assets;
use sov_check::manifest::load_curriculum;
use sov_check::tasks::collect_tasks;
use sov_check::{ContentLayout, ValidationReport};
use sov_config::SovConfig;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::output::report::{render_header, render_report, render_result};

/// Handle `sov-validate [check]`. Returns the process exit status.
pub fn handle(
    project_root: &Path,
    config: &SovConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<i32> {
    let layout = ContentLayout::from_config(project_root, config);
    let audio_label = layout.audio_extension.to_uppercase();
    let progress = |line: &str| {
        if !flags.quiet {
            println!("{line}");
        }
    };

    if !flags.quiet {
        output(&render_header(project_root));
    }

    progress("Scanning task files...");
    let tasks = collect_tasks(&layout).context("failed to collect task files")?;
    progress(&format!("Scanning {audio_label} files..."));
    let assets = collect_assets(&layout).context("failed to collect speech clips")?;
    let curriculum = load_curriculum(&layout).context("failed to load curriculum manifest")?;

    let report = ValidationReport::build(&layout, &tasks, &assets, &curriculum);
    tracing::debug!(
        issues = report.issue_count(),
        tasks = report.counts.tasks,
        clips = report.counts.audio_files,
        "validation finished"
    );

    if flags.quiet {
        output(&render_result(&report, &audio_label));
    } else {
        output(&render_report(&report, &audio_label));
    }

    Ok(report.exit_code())
}
