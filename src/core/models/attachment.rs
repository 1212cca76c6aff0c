//! Attachment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state an attachment must be in to count as active
const ATTACHED_STATE: &str = "ATTACHED";

/// A volume-to-instance attachment as listed in a compartment inventory
///
/// The domain model allows at most one *active* attachment per volume;
/// listings that report more are an invariant violation resolved by the
/// correlator (most recently created wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Identifier of the attached volume
    pub volume_id: String,

    /// Identifier of the compute instance
    pub instance_id: String,

    /// Display name of the compute instance
    pub instance_name: String,

    /// Lifecycle state of the attachment (e.g. "ATTACHED", "DETACHING")
    pub lifecycle_state: String,

    /// When the attachment was created; used as the duplicate tie-break
    pub time_created: DateTime<Utc>,
}

impl AttachmentRecord {
    /// Whether this attachment is currently active
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.lifecycle_state == ATTACHED_STATE
    }
}
