//! Error types for the logicfind core.
//!
//! Malformed scan records are not represented here: they are recovered
//! per-record inside the parser (skipped, or defaulted to the epoch) and
//! never surface as errors.

use thiserror::Error;

use crate::config::ConfigError;
use crate::scanner::ScanError;

/// Errors that can occur while producing the project list.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External scan invocation error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}

/// A specialized `Result` type for finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
