//! Compliance classifier
//!
//! Applies the staleness policy to one unified volume view. Pure: the
//! evaluation instant is passed in, fixed once for the whole run.

use chrono::{DateTime, Utc};

use crate::core::models::{
    ClassifiedRecord, ComplianceVerdict, UnifiedVolumeView, VerdictStatus,
};

/// Classify one volume view against the staleness threshold
///
/// - `NO_BACKUP` when the volume has zero backups
/// - `STALE_BACKUP` when the most recent backup is older than
///   `max_age_days` whole days (rounded down)
/// - `COMPLIANT` otherwise; an age exactly equal to the threshold is
///   compliant
///
/// A backup timestamp in the future (clock skew) is treated as age zero,
/// never negative.
#[must_use]
pub fn classify(
    view: UnifiedVolumeView,
    max_age_days: u32,
    evaluated_at: DateTime<Utc>,
) -> ClassifiedRecord {
    let verdict = match view.latest_backup_at {
        None => ComplianceVerdict {
            status: VerdictStatus::NoBackup,
            evaluated_at,
            backup_age_days: None,
        },
        Some(latest) => {
            let age_days = backup_age_days(latest, evaluated_at);
            let status = if age_days > i64::from(max_age_days) {
                VerdictStatus::StaleBackup
            } else {
                VerdictStatus::Compliant
            };
            ComplianceVerdict {
                status,
                evaluated_at,
                backup_age_days: Some(age_days),
            }
        },
    };

    ClassifiedRecord { view, verdict }
}

/// Age of a backup in whole days, rounded down and clamped at zero
fn backup_age_days(backup_at: DateTime<Utc>, evaluated_at: DateTime<Utc>) -> i64 {
    (evaluated_at - backup_at).num_days().max(0)
}
