//! Audit report aggregate
//!
//! The report is built once per run and never mutated afterwards; a new
//! run produces a new report. Compartment order in `outcomes` is the
//! discovery order, which keeps reports diffable between runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClassifiedRecord, Compartment};

/// Why a compartment was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The caller lacks read access
    AccessDenied,
    /// A listing call failed for a non-authorization reason
    TransientError,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::TransientError => write!(f, "TRANSIENT_ERROR"),
        }
    }
}

/// The result of auditing one compartment
///
/// Partial failure is data, not an exception: a failed compartment is
/// recorded here and the run continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompartmentOutcome {
    /// The compartment was fully collected and classified
    Audited {
        /// The compartment as discovered
        compartment: Compartment,
        /// One classified record per volume
        records: Vec<ClassifiedRecord>,
    },
    /// The compartment could not be collected
    Skipped {
        /// Identifier of the skipped compartment
        compartment_id: String,
        /// Display name of the skipped compartment
        compartment_name: String,
        /// Error classification
        reason: SkipReason,
        /// Human-readable detail from the failed listing call
        detail: String,
    },
}

impl CompartmentOutcome {
    /// Display name of the compartment this outcome concerns
    #[must_use]
    pub fn compartment_name(&self) -> &str {
        match self {
            Self::Audited { compartment, .. } => &compartment.name,
            Self::Skipped { compartment_name, .. } => compartment_name,
        }
    }
}

/// Volume totals for one availability domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdTally {
    /// Volumes seen in this availability domain
    pub total: u64,
    /// Of those, volumes that are stale or unbacked
    pub non_compliant: u64,
}

/// Derived summary counts for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Compartments fully audited
    pub audited_compartment_count: u64,
    /// Compartments skipped due to collection failure
    pub skipped_compartment_count: u64,
    /// Volumes classified across all audited compartments
    pub total_volumes: u64,
    /// Volumes with a fresh enough backup
    pub compliant_count: u64,
    /// Volumes whose most recent backup is too old
    pub stale_backup_count: u64,
    /// Volumes with no backup at all
    pub no_backup_count: u64,
    /// Stale plus unbacked
    pub non_compliant_count: u64,
    /// Per-availability-domain totals, sorted by domain name
    pub availability_domains: BTreeMap<String, AdTally>,
}

/// The root aggregate of one audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// The run's single evaluation instant
    pub generated_at: DateTime<Utc>,

    /// The staleness threshold the run was classified against
    pub max_backup_age_days: u32,

    /// Per-compartment outcomes in discovery order
    pub outcomes: Vec<CompartmentOutcome>,

    /// Derived counts over all outcomes
    pub summary: AuditSummary,
}

impl AuditReport {
    /// Iterate over the classified records of all audited compartments
    #[must_use]
    pub fn classified_records(&self) -> impl Iterator<Item = &ClassifiedRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            CompartmentOutcome::Audited { records, .. } => Some(records.iter()),
            CompartmentOutcome::Skipped { .. } => None,
        })
        .flatten()
    }
}
