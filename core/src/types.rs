//! Domain types for discovered Logic Pro projects.
//!
//! This module defines [`ProjectEntry`], the normalized representation of one
//! discovered project file, along with the derivation of its stable identity.
//! Entries serialize to camelCase JSON for consumption by presentation layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace UUID for deriving deterministic entry ids from raw scan records.
///
/// Hashing under a fixed namespace guarantees the same raw record always maps
/// to the same id across runs, while structurally different records get
/// distinct ids with negligible collision probability.
const RECORD_NAMESPACE: Uuid = Uuid::from_bytes([
    0x6c, 0x6f, 0x67, 0x69, // "logi"
    0x63, 0x66, 0x69, 0x6e, // "cfin"
    0x64, 0x72, 0x65, 0x63, // "drec"
    0x6f, 0x72, 0x64, 0x73, // "ords"
]);

/// A discovered Logic Pro project file.
///
/// Entries are constructed fresh on every scan and are not persisted. The
/// `id` field is a pure function of the raw scan record the entry was parsed
/// from, suitable as a list key (it is not a security token).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Display name, the final segment of the project path.
    pub name: String,

    /// Stable identity derived from the raw scan record.
    pub id: String,

    /// Absolute filesystem path, also the argument to the "open" action.
    pub path: String,

    /// Last modification time. Falls back to the Unix epoch when the source
    /// timestamp could not be parsed.
    pub last_modified: DateTime<Utc>,
}

/// Derives the stable entry id for a raw scan record.
///
/// The id is a UUIDv5 content hash of the original, unsplit record text, not
/// of the derived fields, so two structurally different records never share
/// an id even when they would normalize to the same displayed fields.
///
/// # Examples
///
/// ```
/// use logicfind_core::types::record_id;
///
/// let record = "/Users/x/Song.logicx,1700000000";
/// assert_eq!(record_id(record), record_id(record));
/// assert_ne!(record_id(record), record_id("/Users/x/Demo.logicx,1700000000"));
/// ```
#[must_use]
pub fn record_id(raw: &str) -> String {
    Uuid::new_v5(&RECORD_NAMESPACE, raw.as_bytes()).to_string()
}
