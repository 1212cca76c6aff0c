//! Volume model
//!
//! Covers both detachable block volumes and instance boot volumes; the two
//! kinds share a shape and differ only in the `kind` tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of storage volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeKind {
    /// Detachable block storage volume
    Block,
    /// Boot volume backing a compute instance
    Boot,
}

impl std::fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Block => write!(f, "BLOCK"),
            Self::Boot => write!(f, "BOOT"),
        }
    }
}

/// One volume as listed in a compartment inventory
///
/// Immutable once collected; owned by its compartment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRecord {
    /// Opaque volume identifier
    pub id: String,

    /// Block or boot
    pub kind: VolumeKind,

    /// Identifier of the owning compartment
    pub compartment_id: String,

    /// Human-readable display name
    pub display_name: String,

    /// Provisioned size in gigabytes, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_gbs: Option<u64>,

    /// Availability domain the volume lives in, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,

    /// Lifecycle state as reported by the listing call (e.g. "AVAILABLE")
    pub lifecycle_state: String,

    /// When the volume was created
    pub time_created: DateTime<Utc>,
}
