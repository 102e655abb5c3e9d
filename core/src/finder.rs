//! Pipeline orchestration: scan, normalize, sort.
//!
//! Two variants of the same operation are exposed. [`try_find_projects`]
//! reports failures as typed errors so a caller can distinguish "nothing
//! found" from "scan failed". [`find_projects`] is the fail-soft variant: any
//! failure is logged and collapsed into an empty list, so a presentation
//! layer always has something to render.

use tracing::{debug, error};

use crate::config::ScanConfig;
use crate::error::Result;
use crate::parser::parse_scan_output;
use crate::scanner::run_scan;
use crate::types::ProjectEntry;

/// Scans for project files and returns them sorted by modification time,
/// most recent first.
///
/// Each call spawns one external scan; concurrent calls are not coalesced.
///
/// # Errors
///
/// Returns a [`crate::error::FinderError`] when the external scan fails.
/// Malformed records within a successful scan are recovered per-record and
/// do not produce errors.
pub async fn try_find_projects(config: &ScanConfig) -> Result<Vec<ProjectEntry>> {
    let raw = run_scan(config).await?;
    let entries = parse_scan_output(&raw);

    debug!(
        count = entries.len(),
        root = %config.root_dir.display(),
        "project scan completed"
    );

    Ok(entries)
}

/// Fail-soft variant of [`try_find_projects`].
///
/// Collapses every failure into an empty list after logging it, so the
/// caller never has to handle an error to keep rendering.
pub async fn find_projects(config: &ScanConfig) -> Vec<ProjectEntry> {
    match try_find_projects(config).await {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                error = %e,
                root = %config.root_dir.display(),
                "project scan failed, returning empty list"
            );
            Vec::new()
        }
    }
}
