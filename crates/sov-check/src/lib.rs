//! # sov-check
//!
//! Consistency checks over a Sovyonok content tree.
//!
//! A run is a single linear pass:
//! 1. [`tasks::collect_tasks`] indexes every task-definition file
//! 2. [`assets::collect_assets`] indexes every speech clip
//! 3. [`manifest::validate_curriculum`] reconciles the manifest with the task files
//! 4. [`crossref`] diffs the task index against the audio index
//! 5. [`report::ValidationReport`] gathers the results
//!
//! [`check_project`] runs all of them.

pub mod assets;
pub mod crossref;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod report;
pub mod tasks;
pub mod walk;

pub use error::CheckError;
pub use layout::ContentLayout;
pub use report::{ValidationReport, check_project};
