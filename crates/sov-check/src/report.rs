//! Aggregated result of one validation run.

use std::path::PathBuf;

use sov_core::entities::Curriculum;
use sov_core::{Issue, IssueCategory};

use crate::assets::{AssetIndex, collect_assets};
use crate::crossref::{find_missing_assets, find_orphan_assets};
use crate::error::CheckError;
use crate::layout::ContentLayout;
use crate::manifest::{load_curriculum, validate_curriculum};
use crate::tasks::{TaskIndex, collect_tasks};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub topic_files: usize,
    pub tasks: usize,
    pub audio_files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub project_root: PathBuf,
    pub curriculum_name: String,
    pub counts: SummaryCounts,
    /// Clips skipped for sitting at the wrong depth.
    pub unexpected_assets: Vec<String>,
    pub curriculum_issues: Vec<Issue>,
    pub missing_assets: Vec<Issue>,
    pub orphan_assets: Vec<Issue>,
}

impl ValidationReport {
    /// Reconcile already-collected inputs.
    #[must_use]
    pub fn build(
        layout: &ContentLayout,
        tasks: &TaskIndex,
        assets: &AssetIndex,
        curriculum: &Curriculum,
    ) -> Self {
        let curriculum_report = validate_curriculum(curriculum, tasks, &layout.tasks_path());
        let speech_root = layout.speech_display();

        let missing_assets = find_missing_assets(tasks.keys(), assets.keys())
            .into_iter()
            .map(|key| Issue::MissingAudio {
                path: key.file_path(&speech_root, &layout.audio_extension),
                question: tasks.question_for(&key).to_string(),
                key,
            })
            .collect();

        let orphan_assets = find_orphan_assets(tasks.keys(), assets.keys())
            .into_iter()
            .map(|key| Issue::OrphanAudio {
                path: key.file_path(&speech_root, &layout.audio_extension),
                key,
            })
            .collect();

        Self {
            project_root: layout.root.clone(),
            curriculum_name: layout.curriculum_display(),
            counts: SummaryCounts {
                topic_files: tasks.file_count(),
                tasks: tasks.task_count(),
                audio_files: assets.len(),
            },
            unexpected_assets: assets.unexpected().to_vec(),
            curriculum_issues: curriculum_report.issues,
            missing_assets,
            orphan_assets,
        }
    }

    /// Every issue, curriculum first, then missing clips, then orphan clips.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.curriculum_issues
            .iter()
            .chain(&self.missing_assets)
            .chain(&self.orphan_assets)
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.curriculum_issues.len() + self.missing_assets.len() + self.orphan_assets.len()
    }

    #[must_use]
    pub fn count_of(&self, category: IssueCategory) -> usize {
        self.issues()
            .filter(|issue| issue.category() == category)
            .count()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.issue_count() == 0
    }

    /// Process exit status for this report: 0 on pass, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }
}

/// Collect, validate, and diff the content tree described by `layout`.
///
/// # Errors
///
/// Returns [`CheckError`] if a task file or the manifest cannot be read or
/// parsed, or a directory cannot be walked.
pub fn check_project(layout: &ContentLayout) -> Result<ValidationReport, CheckError> {
    let tasks = collect_tasks(layout)?;
    let assets = collect_assets(layout)?;
    let curriculum = load_curriculum(layout)?;
    Ok(ValidationReport::build(layout, &tasks, &assets, &curriculum))
}
