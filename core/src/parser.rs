//! Raw scan output parsing and normalization.
//!
//! This module turns the scanner's raw text into sorted [`ProjectEntry`]
//! values. It is a pure, stateless transformation: the same raw output always
//! yields the same sequence, including ids and ordering.
//!
//! # Record Format
//!
//! One record per line, `<absolute-path>,<epoch-seconds>`. The split happens
//! at the FIRST delimiter occurrence, so a path containing a comma misparses:
//! the tail of the path bleeds into the timestamp field, fails to parse, and
//! the entry falls back to the Unix epoch. The scanner cannot guarantee
//! delimiter-free paths, so this is a documented limitation rather than
//! something worth disambiguating here.
//!
//! # Recovery Policy
//!
//! | Input | Outcome |
//! |-------|---------|
//! | Line without a delimiter | Skipped, logged at `warn` |
//! | Unparseable timestamp | Entry kept, `last_modified` = Unix epoch |
//! | Empty output | Empty sequence |

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::types::{record_id, ProjectEntry};

/// Field delimiter separating path from timestamp in raw records.
const RECORD_DELIMITER: char = ',';

/// Parses raw scan output into entries sorted by modification time,
/// most recent first.
///
/// The sort is stable: entries with equal timestamps retain their pre-sort
/// (traversal) order.
///
/// # Examples
///
/// ```
/// use logicfind_core::parser::parse_scan_output;
///
/// let raw = "/Users/x/Song.logicx,1700000000\n/Users/x/Demo.logicx,1710000000";
/// let entries = parse_scan_output(raw);
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].name, "Demo.logicx");
/// assert_eq!(entries[1].name, "Song.logicx");
/// ```
#[must_use]
pub fn parse_scan_output(raw: &str) -> Vec<ProjectEntry> {
    let mut entries: Vec<ProjectEntry> = raw.trim().lines().filter_map(parse_record).collect();

    entries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    entries
}

/// Parses a single raw record into an entry.
///
/// Returns `None` for lines that do not contain the delimiter.
fn parse_record(line: &str) -> Option<ProjectEntry> {
    if line.is_empty() {
        return None;
    }

    let Some((path_part, timestamp_part)) = line.split_once(RECORD_DELIMITER) else {
        warn!(line, "skipping malformed scan record");
        return None;
    };

    let name = match path_part.rfind('/') {
        Some(idx) => path_part[idx + 1..].to_string(),
        None => path_part.to_string(),
    };

    Some(ProjectEntry {
        name,
        id: record_id(line),
        path: path_part.to_string(),
        last_modified: parse_epoch_seconds(timestamp_part),
    })
}

/// Parses a timestamp field as epoch seconds, falling back to the Unix epoch.
///
/// Fractional seconds are accepted so that GNU `find -printf '%T@'` output
/// parses without loss.
fn parse_epoch_seconds(value: &str) -> DateTime<Utc> {
    let Ok(seconds) = value.trim().parse::<f64>() else {
        return DateTime::UNIX_EPOCH;
    };
    if !seconds.is_finite() {
        return DateTime::UNIX_EPOCH;
    }

    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
}
