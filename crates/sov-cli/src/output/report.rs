//! Human-readable rendering of a validation run.

use std::path::Path;

use sov_check::ValidationReport;
use sov_core::{Issue, IssueCategory};

const RULE_WIDTH: usize = 70;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(light_rule());
    lines.push(title.to_string());
    lines.push(light_rule());
}

/// Banner printed before scanning starts.
#[must_use]
pub fn render_header(project_root: &Path) -> Vec<String> {
    vec![
        heavy_rule(),
        String::from("SOVYONOK PRO - Project Validation"),
        heavy_rule(),
        format!("Project root: {}", project_root.display()),
        String::new(),
    ]
}

/// Everything after scanning: warnings, counts, the three checks, and the result.
///
/// `audio_label` names the clip format in headings, e.g. `WAV`.
#[must_use]
pub fn render_report(report: &ValidationReport, audio_label: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for path in &report.unexpected_assets {
        lines.push(format!(
            "  WARNING: Unexpected {audio_label} path structure: {path}"
        ));
    }

    lines.push(String::new());
    section(&mut lines, "SUMMARY COUNTS");
    lines.push(format!(
        "  Total topic files (JSON):  {}",
        report.counts.topic_files
    ));
    lines.push(format!("  Total tasks:               {}", report.counts.tasks));
    lines.push(format!(
        "  {:<27}{}",
        format!("Total {audio_label} files:"),
        report.counts.audio_files
    ));
    lines.push(String::new());

    section(
        &mut lines,
        &format!("CHECK 1: Curriculum validation ({})", report.curriculum_name),
    );
    if report.curriculum_issues.is_empty() {
        lines.push(String::from("  OK: All curriculum references match"));
    } else {
        for issue in &report.curriculum_issues {
            lines.push(format!("  ISSUE: {issue}"));
        }
    }
    lines.push(String::new());

    section(
        &mut lines,
        &format!("CHECK 2: Missing {audio_label} files (task exists, no {audio_label})"),
    );
    if report.missing_assets.is_empty() {
        lines.push(format!(
            "  OK: All tasks have matching {audio_label} files"
        ));
    } else {
        for issue in &report.missing_assets {
            lines.push(format!("  {issue}"));
            if let Issue::MissingAudio { question, .. } = issue {
                lines.push(format!("           question: \"{question}\""));
            }
        }
    }
    lines.push(String::new());

    section(
        &mut lines,
        &format!("CHECK 3: Orphan {audio_label} files ({audio_label} exists, no matching task)"),
    );
    if report.orphan_assets.is_empty() {
        lines.push(format!("  OK: No orphan {audio_label} files found"));
    } else {
        for issue in &report.orphan_assets {
            lines.push(format!("  {issue}"));
        }
    }
    lines.push(String::new());

    lines.extend(render_result(report, audio_label));
    lines
}

/// Final pass/fail block.
#[must_use]
pub fn render_result(report: &ValidationReport, audio_label: &str) -> Vec<String> {
    let mut lines = vec![heavy_rule()];
    if report.passed() {
        lines.push(String::from("RESULT: PASS - All checks passed!"));
    } else {
        lines.push(format!(
            "RESULT: FAIL - {} issue(s) found",
            report.issue_count()
        ));
        lines.push(format!(
            "  - Curriculum mismatches: {}",
            report.count_of(IssueCategory::Curriculum)
        ));
        lines.push(format!(
            "  - {:<23}{}",
            format!("Missing {audio_label} files:"),
            report.count_of(IssueCategory::MissingAudio)
        ));
        lines.push(format!(
            "  - {:<23}{}",
            format!("Orphan {audio_label} files:"),
            report.count_of(IssueCategory::OrphanAudio)
        ));
    }
    lines.push(heavy_rule());
    lines
}
