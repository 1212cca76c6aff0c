//! Backup model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time recovery artifact for one volume
///
/// Zero or more exist per volume; a volume with no backups is a valid
/// state that the audit must represent, not drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Opaque backup identifier
    pub id: String,

    /// Identifier of the volume this backup was taken from
    pub volume_id: String,

    /// When the backup was taken
    pub time_created: DateTime<Utc>,

    /// Lifecycle state as reported by the listing call (e.g. "AVAILABLE")
    pub lifecycle_state: String,
}
