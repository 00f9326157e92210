//! Manifest validator: reconciles the curriculum with the task files on disk.

use std::collections::BTreeSet;
use std::path::Path;

use sov_core::Issue;
use sov_core::entities::{Curriculum, TaskCount, read_document};

use crate::error::CheckError;
use crate::layout::ContentLayout;
use crate::tasks::TaskIndex;

/// A manifest topic that names a task file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedTopic {
    pub task_file: String,
    pub declared_count: TaskCount,
    pub age_group: String,
    pub subject: String,
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumReport {
    /// Issues in manifest order, followed by orphan task files in sorted order.
    pub issues: Vec<Issue>,
    pub topics: Vec<ReferencedTopic>,
}

/// Read the curriculum manifest.
///
/// # Errors
///
/// Returns [`CheckError::Document`] if the manifest is missing or malformed.
pub fn load_curriculum(layout: &ContentLayout) -> Result<Curriculum, CheckError> {
    Ok(read_document(&layout.curriculum_path())?)
}

/// Check every manifest topic against `tasks`, then flag task files no topic
/// references.
///
/// `tasks_root` is only used to test whether a referenced file exists.
#[must_use]
pub fn validate_curriculum(
    curriculum: &Curriculum,
    tasks: &TaskIndex,
    tasks_root: &Path,
) -> CurriculumReport {
    let mut report = CurriculumReport::default();

    for age_group in &curriculum.age_groups {
        for subject in &age_group.subjects {
            for topic in &subject.topics {
                let Some(task_file) = topic.task_file() else {
                    report.issues.push(Issue::TopicWithoutTaskFile {
                        age_group: age_group.id.clone(),
                        subject: subject.id.clone(),
                        topic: topic.id.clone(),
                    });
                    continue;
                };

                report.topics.push(ReferencedTopic {
                    task_file: task_file.to_string(),
                    declared_count: topic.task_count.clone(),
                    age_group: age_group.id.clone(),
                    subject: subject.id.clone(),
                    topic: topic.id.clone(),
                });

                if !tasks_root.join(task_file).exists() {
                    report.issues.push(Issue::TaskFileMissing {
                        task_file: task_file.to_string(),
                    });
                    continue;
                }

                let actual = tasks.tasks_in(task_file).map_or(0, <[_]>::len);
                if !topic.task_count.matches(actual) {
                    report.issues.push(Issue::TaskCountMismatch {
                        task_file: task_file.to_string(),
                        declared: topic.task_count.clone(),
                        actual,
                    });
                }
            }
        }
    }

    let referenced: BTreeSet<&str> = report
        .topics
        .iter()
        .map(|topic| topic.task_file.as_str())
        .collect();
    let orphans: Vec<Issue> = tasks
        .files()
        .filter(|file| !referenced.contains(file))
        .map(|file| Issue::OrphanTaskFile {
            task_file: file.to_string(),
        })
        .collect();
    report.issues.extend(orphans);

    report
}
