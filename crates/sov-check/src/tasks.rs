//! Task collector: indexes every task-definition file under the task root.

use std::collections::{BTreeMap, BTreeSet};

use sov_core::entities::{Task, TaskFile, read_document};
use sov_core::keys::slash_path;
use sov_core::EntryKey;

use crate::error::CheckError;
use crate::layout::ContentLayout;
use crate::walk::files_with_extension;

/// Tasks grouped by file, plus the set of `(topic, task id)` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIndex {
    extension: String,
    by_file: BTreeMap<String, Vec<Task>>,
    keys: BTreeSet<EntryKey>,
}

impl TaskIndex {
    /// Empty index for task files with `extension`.
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Record the tasks of the file at `file_key` (relative, `/`-separated,
    /// with extension).
    pub fn insert_file(&mut self, file_key: impl Into<String>, tasks: Vec<Task>) {
        let file_key = file_key.into();
        let topic = self.topic_of(&file_key).to_string();
        for task in &tasks {
            self.keys.insert(EntryKey::new(topic.clone(), task.id.clone()));
        }
        self.by_file.insert(file_key, tasks);
    }

    /// Topic path of a file key: the key without its extension.
    fn topic_of<'a>(&self, file_key: &'a str) -> &'a str {
        file_key
            .strip_suffix(&self.extension)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(file_key)
    }

    /// Parsed tasks of one file, if that file was collected.
    #[must_use]
    pub fn tasks_in(&self, file_key: &str) -> Option<&[Task]> {
        self.by_file.get(file_key).map(Vec::as_slice)
    }

    /// Collected file keys in sorted order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.by_file.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn keys(&self) -> &BTreeSet<EntryKey> {
        &self.keys
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.by_file.len()
    }

    /// Number of distinct `(topic, id)` pairs.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.keys.len()
    }

    /// Question text of the first task in `key.topic` with id `key.stem`,
    /// or `""` when there is none.
    #[must_use]
    pub fn question_for(&self, key: &EntryKey) -> &str {
        let file_key = format!("{}.{}", key.topic, self.extension);
        self.by_file
            .get(&file_key)
            .and_then(|tasks| tasks.iter().find(|task| task.id == key.stem))
            .map_or("", |task| task.question.as_str())
    }
}

/// Walk the task root and parse every task file.
///
/// A missing task root yields an empty index. The manifest check then flags
/// each referenced file as missing.
///
/// # Errors
///
/// Returns [`CheckError::Document`] for the first file that cannot be read or
/// parsed; nothing is recovered from a broken file.
pub fn collect_tasks(layout: &ContentLayout) -> Result<TaskIndex, CheckError> {
    let root = layout.tasks_path();
    let mut index = TaskIndex::new(layout.task_extension.clone());

    if !root.is_dir() {
        tracing::warn!(path = %root.display(), "task directory not found");
        return Ok(index);
    }

    for relative in files_with_extension(&root, &layout.task_extension)? {
        let file: TaskFile = read_document(&root.join(&relative))?;
        let file_key = slash_path(&relative);
        tracing::debug!(file = %file_key, tasks = file.tasks.len(), "parsed task file");
        index.insert_file(file_key, file.tasks);
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn task(id: &str, question: &str) -> Task {
        Task {
            id: id.into(),
            question: question.into(),
        }
    }

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn insert_file_derives_topic_from_key() {
        let mut index = TaskIndex::new("json");
        index.insert_file(
            "age3/speech/s01.json",
            vec![task("s01_01", "Moo?"), task("s01_02", "Woof?")],
        );

        let keys: Vec<String> = index.keys().iter().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            vec!["age3/speech/s01/s01_01", "age3/speech/s01/s01_02"]
        );
        assert_eq!(index.file_count(), 1);
        assert_eq!(index.task_count(), 2);
    }

    #[test]
    fn duplicate_ids_count_once_in_keys_but_twice_in_file() {
        let mut index = TaskIndex::new("json");
        index.insert_file(
            "age3/speech/s01.json",
            vec![task("s01_01", "first"), task("s01_01", "second")],
        );

        assert_eq!(index.task_count(), 1);
        assert_eq!(index.tasks_in("age3/speech/s01.json").unwrap().len(), 2);
        let key = EntryKey::new("age3/speech/s01", "s01_01");
        assert_eq!(index.question_for(&key), "first");
    }

    #[test]
    fn question_lookup_falls_back_to_empty() {
        let mut index = TaskIndex::new("json");
        index.insert_file("age3/speech/s01.json", vec![task("s01_01", "Moo?")]);

        assert_eq!(
            index.question_for(&EntryKey::new("age3/speech/s01", "s01_09")),
            ""
        );
        assert_eq!(
            index.question_for(&EntryKey::new("age9/none/x", "x_01")),
            ""
        );
    }

    #[test]
    fn collects_nested_files_in_sorted_order() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ContentLayout::with_defaults(tmp.path());
        let tasks = layout.tasks_path();
        write(
            &tasks,
            "age4/math/m01.json",
            r#"{"tasks":[{"id":"m01_01","question":"2+2?"}]}"#,
        );
        write(
            &tasks,
            "age3/speech/s01.json",
            r#"{"tasks":[{"id":"s01_01","question":"Moo?"},{"id":"s01_02"}]}"#,
        );
        write(&tasks, "age3/speech/readme.txt", "not a task file");

        let index = collect_tasks(&layout).unwrap();

        let files: Vec<&str> = index.files().collect();
        assert_eq!(files, vec!["age3/speech/s01.json", "age4/math/m01.json"]);
        assert_eq!(index.task_count(), 3);
        assert_eq!(
            index.question_for(&EntryKey::new("age4/math/m01", "m01_01")),
            "2+2?"
        );
    }

    #[test]
    fn malformed_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ContentLayout::with_defaults(tmp.path());
        write(&layout.tasks_path(), "age3/speech/s01.json", "{ not json");

        let err = collect_tasks(&layout).expect_err("broken file should abort");
        assert!(err.to_string().contains("s01.json"));
    }

    #[test]
    fn task_without_id_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ContentLayout::with_defaults(tmp.path());
        write(
            &layout.tasks_path(),
            "age3/speech/s01.json",
            r#"{"tasks":[{"question":"no id"}]}"#,
        );

        assert!(collect_tasks(&layout).is_err());
    }

    #[test]
    fn missing_task_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = ContentLayout::with_defaults(tmp.path());

        let index = collect_tasks(&layout).unwrap();
        assert_eq!(index.file_count(), 0);
        assert_eq!(index.task_count(), 0);
    }
}
