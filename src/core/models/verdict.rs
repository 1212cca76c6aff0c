//! Compliance verdict model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a volume fares under the staleness policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    /// Most recent backup is within the threshold (boundary inclusive)
    Compliant,
    /// Most recent backup is older than the threshold
    StaleBackup,
    /// The volume has no backups at all
    NoBackup,
}

impl VerdictStatus {
    /// Whether this status counts as non-compliant
    #[must_use]
    pub const fn is_non_compliant(self) -> bool {
        !matches!(self, Self::Compliant)
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compliant => write!(f, "COMPLIANT"),
            Self::StaleBackup => write!(f, "STALE_BACKUP"),
            Self::NoBackup => write!(f, "NO_BACKUP"),
        }
    }
}

/// The classification outcome for one volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// The status under the staleness policy
    pub status: VerdictStatus,

    /// The single evaluation instant of the run; identical across every
    /// verdict in one report
    pub evaluated_at: DateTime<Utc>,

    /// Age of the most recent backup in whole days (rounded down, clamped
    /// to zero for future timestamps); absent when there is no backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_age_days: Option<i64>,
}
