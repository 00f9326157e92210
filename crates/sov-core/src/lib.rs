//! # sov-core
//!
//! Core types for the Sovyonok content validator.
//!
//! This crate provides the types shared by every other crate in the workspace:
//! - Input document models (task files and the curriculum manifest)
//! - Entry keys identifying a task or an audio asset within a topic
//! - Issue types describing consistency discrepancies
//! - Cross-cutting error types
//! - JSON Schema lookup for the input document formats

pub mod entities;
pub mod errors;
pub mod issues;
pub mod keys;
pub mod schema;

pub use errors::CoreError;
pub use issues::{Issue, IssueCategory};
pub use keys::EntryKey;
