//! Unified per-volume view and its classified form
//!
//! The correlator produces exactly one [`UnifiedVolumeView`] per input
//! volume, including volumes with zero backups and no attachment. The
//! classifier pairs each view with a verdict to form a
//! [`ClassifiedRecord`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BackupRecord, ComplianceVerdict, VolumeRecord};

/// Reference to the instance a volume is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRef {
    /// Opaque instance identifier
    pub instance_id: String,
    /// Instance display name
    pub instance_name: String,
}

/// One volume with its backups and attachment resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedVolumeView {
    /// The volume's own fields
    pub volume: VolumeRecord,

    /// All backups of this volume, newest first; timestamp ties ordered by
    /// descending backup id for determinism
    pub backups: Vec<BackupRecord>,

    /// Creation time of the most recent backup, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_backup_at: Option<DateTime<Utc>>,

    /// The actively attached instance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_instance: Option<InstanceRef>,
}

/// A unified view paired with its compliance verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// The correlated per-volume view
    #[serde(flatten)]
    pub view: UnifiedVolumeView,

    /// The verdict under the run's staleness policy
    pub verdict: ComplianceVerdict,
}
