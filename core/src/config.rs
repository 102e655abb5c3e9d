//! Scan configuration for logicfind.
//!
//! The pipeline never reads ambient state: every scan takes an explicit
//! [`ScanConfig`] value. [`ScanConfig::from_env`] exists for the CLI edge,
//! which sources the configuration from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `LOGICFIND_ROOT` | No | `~/Music/Logic` | Directory scanned for projects |
//! | `LOGICFIND_EXTENSION` | No | `.logicx` | Project file extension |
//! | `LOGICFIND_MAX_RESULTS` | No | 200 | Soft cap on scanned files |
//! | `LOGICFIND_SCAN_TIMEOUT_SECS` | No | 30 | Scan timeout in seconds |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::BaseDirs;
use thiserror::Error;

/// Default file extension for Logic Pro projects.
pub const DEFAULT_EXTENSION: &str = ".logicx";

/// Default soft cap on scan results.
///
/// The cap bounds cost and output size; it is applied in traversal order
/// before sorting, so there is no "most recent N" guarantee.
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Default scan timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default projects directory relative to home.
const DEFAULT_PROJECTS_DIR: &str = "Music/Logic";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to determine home directory.
    #[error("failed to determine home directory")]
    NoHomeDirectory,
}

/// Configuration for a single project scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory tree to search for project files.
    pub root_dir: PathBuf,

    /// File extension to match, including the leading dot.
    pub extension: String,

    /// Soft cap on the number of files taken in traversal order.
    pub max_results: usize,

    /// Upper bound on the external scan process runtime.
    pub timeout: Duration,
}

impl ScanConfig {
    /// Creates a configuration for `root_dir` with the default extension,
    /// result cap, and timeout.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a `ScanConfig` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `LOGICFIND_EXTENSION` is set to an empty or dot-only value
    /// - `LOGICFIND_MAX_RESULTS` is set but is not a positive integer
    /// - `LOGICFIND_SCAN_TIMEOUT_SECS` is set but is not a positive integer
    /// - The home directory cannot be determined (needed for the default root)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Optional: LOGICFIND_ROOT (default: ~/Music/Logic)
        let root_dir = match env::var("LOGICFIND_ROOT") {
            Ok(val) => PathBuf::from(val),
            Err(_) => {
                let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
                base_dirs.home_dir().join(DEFAULT_PROJECTS_DIR)
            }
        };

        // Optional: LOGICFIND_EXTENSION (default: .logicx)
        let extension = match env::var("LOGICFIND_EXTENSION") {
            Ok(val) => normalize_extension(&val)?,
            Err(_) => DEFAULT_EXTENSION.to_string(),
        };

        // Optional: LOGICFIND_MAX_RESULTS (default: 200, must be > 0)
        let max_results = match env::var("LOGICFIND_MAX_RESULTS") {
            Ok(val) => {
                let count = val
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "LOGICFIND_MAX_RESULTS".to_string(),
                        message: format!("expected positive integer, got '{val}'"),
                    })?;
                if count == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "LOGICFIND_MAX_RESULTS".to_string(),
                        message: "result cap must be greater than 0".to_string(),
                    });
                }
                count
            }
            Err(_) => DEFAULT_MAX_RESULTS,
        };

        // Optional: LOGICFIND_SCAN_TIMEOUT_SECS (default: 30, must be > 0)
        let timeout = match env::var("LOGICFIND_SCAN_TIMEOUT_SECS") {
            Ok(val) => {
                let secs = val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "LOGICFIND_SCAN_TIMEOUT_SECS".to_string(),
                    message: format!("expected positive integer, got '{val}'"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "LOGICFIND_SCAN_TIMEOUT_SECS".to_string(),
                        message: "timeout must be at least 1 second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            root_dir,
            extension,
            max_results,
            timeout,
        })
    }
}

/// Normalizes an extension value to a single leading dot.
fn normalize_extension(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "LOGICFIND_EXTENSION".to_string(),
            message: "extension must not be empty".to_string(),
        });
    }
    Ok(format!(".{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to run tests with isolated environment variables.
    /// Clears all LOGICFIND_* vars before the test and restores them after.
    fn with_clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        // Save and remove existing LOGICFIND_* vars
        let saved_vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with("LOGICFIND_"))
            .collect();

        for (key, _) in &saved_vars {
            env::remove_var(key);
        }

        let result = f();

        // Restore saved vars
        for (key, value) in saved_vars {
            env::set_var(key, value);
        }

        result
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = ScanConfig::new("/tmp/projects");

        assert_eq!(config.root_dir, PathBuf::from("/tmp/projects"));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    #[serial]
    fn test_minimal_config() {
        with_clean_env(|| {
            let config = ScanConfig::from_env().expect("should parse minimal config");

            assert!(config.root_dir.ends_with(DEFAULT_PROJECTS_DIR));
            assert_eq!(config.extension, DEFAULT_EXTENSION);
            assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
            assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    #[serial]
    fn test_full_config() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_ROOT", "/custom/projects");
            env::set_var("LOGICFIND_EXTENSION", ".band");
            env::set_var("LOGICFIND_MAX_RESULTS", "50");
            env::set_var("LOGICFIND_SCAN_TIMEOUT_SECS", "5");

            let config = ScanConfig::from_env().expect("should parse full config");

            assert_eq!(config.root_dir, PathBuf::from("/custom/projects"));
            assert_eq!(config.extension, ".band");
            assert_eq!(config.max_results, 50);
            assert_eq!(config.timeout, Duration::from_secs(5));
        });
    }

    #[test]
    #[serial]
    fn test_extension_without_dot_is_normalized() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_EXTENSION", "band");

            let config = ScanConfig::from_env().expect("should normalize extension");
            assert_eq!(config.extension, ".band");
        });
    }

    #[test]
    #[serial]
    fn test_empty_extension_rejected() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_EXTENSION", ".");

            let result = ScanConfig::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "LOGICFIND_EXTENSION"
            ));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_max_results() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_MAX_RESULTS", "not-a-number");

            let result = ScanConfig::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "LOGICFIND_MAX_RESULTS"
            ));
        });
    }

    #[test]
    #[serial]
    fn test_zero_max_results_rejected() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_MAX_RESULTS", "0");

            let result = ScanConfig::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, ref message }
                    if key == "LOGICFIND_MAX_RESULTS" && message.contains("greater than 0")
            ));
        });
    }

    #[test]
    #[serial]
    fn test_zero_timeout_rejected() {
        with_clean_env(|| {
            env::set_var("LOGICFIND_SCAN_TIMEOUT_SECS", "0");

            let result = ScanConfig::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, ref message }
                    if key == "LOGICFIND_SCAN_TIMEOUT_SECS"
                    && message.contains("at least 1 second")
            ));
        });
    }

    #[test]
    fn test_normalize_extension_with_whitespace() {
        let normalized = normalize_extension("  logicx  ").expect("should normalize");
        assert_eq!(normalized, ".logicx");
    }
}
