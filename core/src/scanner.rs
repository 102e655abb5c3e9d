//! External scan process invocation.
//!
//! The scanner shells out to the platform's directory-traversal tools to list
//! project files under a root, one raw record per stdout line in the form
//! `<absolute-path>,<epoch-seconds>`. The result cap is applied in traversal
//! order, before any sorting happens downstream.
//!
//! The invocation is a thin adapter: it captures stdout and stderr, enforces
//! the configured timeout, and reports every failure mode as a typed
//! [`ScanError`]. Whether a failure collapses into an empty result is decided
//! by the caller, not here.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::ScanConfig;

/// Errors that can occur while running the external scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan process could not be spawned.
    #[error("failed to spawn scan process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The scan process exited unsuccessfully.
    #[error("scan process failed: {0}")]
    Failed(std::process::ExitStatus),

    /// The scan process wrote to its error stream.
    #[error("scan process reported errors: {0}")]
    Stderr(String),

    /// The scan did not complete within the configured timeout.
    #[error("scan timed out after {0:?}")]
    Timeout(Duration),

    /// The scan output was not valid UTF-8.
    #[error("scan output was not valid UTF-8")]
    InvalidUtf8,
}

/// Runs the external scan and returns its raw stdout.
///
/// The process is killed if it outlives `config.timeout`. A non-zero exit
/// status or any text on stderr is treated as a scan failure even when
/// stdout carries partial output.
///
/// # Errors
///
/// Returns a [`ScanError`] describing the failure mode; never panics.
pub async fn run_scan(config: &ScanConfig) -> Result<String, ScanError> {
    let command = scan_command(config);
    debug!(command = %command, "running project scan");

    let mut process = Command::new("sh");
    process
        .arg("-c")
        .arg(&command)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = match timeout(config.timeout, process.output()).await {
        Ok(result) => result.map_err(ScanError::Spawn)?,
        Err(_) => return Err(ScanError::Timeout(config.timeout)),
    };

    if !output.status.success() {
        return Err(ScanError::Failed(output.status));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return Err(ScanError::Stderr(stderr.trim().to_string()));
    }

    String::from_utf8(output.stdout).map_err(|_| ScanError::InvalidUtf8)
}

/// Builds the shell command implementing the scan contract for this platform.
///
/// macOS ships BSD userland, so modification times come from `stat -f '%N,%m'`
/// over the capped file list. Elsewhere GNU `find -printf` emits the record
/// directly; `%T@` carries fractional seconds, which the parser accepts.
#[must_use]
pub fn scan_command(config: &ScanConfig) -> String {
    let root = shell_quote(&config.root_dir.to_string_lossy());
    let pattern = shell_quote(&format!("*{}", config.extension));

    #[cfg(target_os = "macos")]
    {
        format!(
            "find {root} -type f -name {pattern} | head -n {cap} | xargs -I{{}} stat -f '%N,%m' '{{}}'",
            cap = config.max_results,
        )
    }

    #[cfg(not(target_os = "macos"))]
    {
        format!(
            "find {root} -type f -name {pattern} -printf '%p,%T@\\n' | head -n {cap}",
            cap = config.max_results,
        )
    }
}

/// Quotes a value for safe interpolation into a `sh -c` command line.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
