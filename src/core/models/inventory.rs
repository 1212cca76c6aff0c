//! Per-compartment inventory triple

use serde::{Deserialize, Serialize};

use super::{AttachmentRecord, BackupRecord, VolumeRecord};

/// Everything the collector retrieves for one compartment
///
/// All three lists may be empty; that is a valid success, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompartmentInventory {
    /// Block and boot volumes in the compartment
    #[serde(default)]
    pub volumes: Vec<VolumeRecord>,

    /// Backups of those volumes
    #[serde(default)]
    pub backups: Vec<BackupRecord>,

    /// Volume-to-instance attachments
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}
