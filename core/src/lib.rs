//! logicfind core - Logic Pro project discovery pipeline.
//!
//! This crate locates Logic Pro project files (`.logicx`) under a configured
//! root directory and turns them into a sorted, deduplicated project list.
//!
//! # Overview
//!
//! The pipeline has two halves. The [`scanner`] invokes an external
//! directory-traversal process that emits one raw record per matching file,
//! `<absolute-path>,<epoch-seconds>`, capped at a configured number of
//! matches and bounded by a timeout. The [`parser`] is a pure transformation
//! of that raw text into [`types::ProjectEntry`] values: it splits each
//! record at the first delimiter, derives the display name from the final
//! path segment, hashes the raw record into a stable id, defaults broken
//! timestamps to the Unix epoch, and stably sorts by modification time
//! descending.
//!
//! Nothing is persisted and no ambient state is read: every scan is a pure
//! function from a [`config::ScanConfig`] to an ordered entry sequence.
//!
//! # Failure Policy
//!
//! [`finder::try_find_projects`] surfaces scan failures as typed errors;
//! [`finder::find_projects`] collapses them into an empty list after logging,
//! which is what list-rendering callers usually want. Individual malformed
//! records never fail a scan either way.
//!
//! # Modules
//!
//! - [`types`]: the `ProjectEntry` domain entity and id derivation
//! - [`scanner`]: external scan process invocation
//! - [`parser`]: raw record parsing and normalization
//! - [`finder`]: pipeline orchestration
//! - [`config`]: scan configuration, explicit or from environment variables
//! - [`error`]: error types for finder operations

pub mod config;
pub mod error;
pub mod finder;
pub mod parser;
pub mod scanner;
pub mod types;

pub use config::{ConfigError, ScanConfig};
pub use error::{FinderError, Result};
pub use finder::{find_projects, try_find_projects};
pub use parser::parse_scan_output;
pub use scanner::{run_scan, scan_command, ScanError};
pub use types::{record_id, ProjectEntry};
