//! Audit orchestrator
//!
//! Drives discovery → collect → correlate → classify for every
//! compartment and folds the outcomes into one report. A compartment's
//! failure becomes a skipped outcome; the run itself always finishes.
//! Single pass, one compartment at a time, in discovery order.

use chrono::{DateTime, Utc};

use crate::core::models::{
    AuditReport, Compartment, CompartmentOutcome, Reachability, SkipReason,
};
use crate::core::ports::{Clock, CompartmentSource, InventorySource};
use crate::core::services::report::ReportBuilder;
use crate::core::services::{classifier, collector, correlator};
use crate::error::{CollectError, ConfigError};

/// Policy inputs for one audit run
#[derive(Debug, Clone)]
pub struct AuditPolicy {
    /// Maximum acceptable age of the most recent backup, in days
    pub max_backup_age_days: u32,
    /// Optional root compartment restricting discovery to a subtree
    pub root_scope: Option<String>,
}

impl AuditPolicy {
    /// Validate the policy; invalid configuration aborts before any
    /// collection begins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_backup_age_days == 0 {
            return Err(ConfigError::InvalidThreshold(0));
        }
        Ok(())
    }
}

/// Run a full audit pass over every discoverable compartment
///
/// Only discovery failure and invalid configuration are fatal. Everything
/// else is captured in the returned report.
pub fn run_audit(
    compartments: &dyn CompartmentSource,
    inventory: &dyn InventorySource,
    clock: &dyn Clock,
    policy: &AuditPolicy,
) -> anyhow::Result<AuditReport> {
    policy.validate()?;

    let discovered = compartments.discover(policy.root_scope.as_deref())?;
    log::info!("discovered {} compartment(s)", discovered.len());

    // One instant for every verdict in the run
    let evaluated_at = clock.now_utc();

    let mut builder = ReportBuilder::new(evaluated_at, policy.max_backup_age_days);
    let total = discovered.len();
    for (index, compartment) in discovered.into_iter().enumerate() {
        log::info!("[{}/{total}] auditing compartment: {}", index + 1, compartment.name);
        let outcome = audit_compartment(inventory, compartment, policy.max_backup_age_days, evaluated_at);
        if let CompartmentOutcome::Skipped { compartment_name, reason, .. } = &outcome {
            log::warn!("skipping compartment {compartment_name}: {reason}");
        }
        builder.push(outcome);
    }

    Ok(builder.build())
}

/// Collect, correlate and classify one compartment
///
/// State machine: PENDING → COLLECTING → {CORRELATING → CLASSIFYING →
/// DONE} | FAILED, with FAILED expressed as a skipped outcome.
fn audit_compartment(
    inventory: &dyn InventorySource,
    compartment: Compartment,
    max_backup_age_days: u32,
    evaluated_at: DateTime<Utc>,
) -> CompartmentOutcome {
    // Compartments already known unreachable at discovery never get
    // listing calls
    match compartment.reachability {
        Reachability::AccessDenied => {
            return skipped(
                &compartment,
                SkipReason::AccessDenied,
                "caller has no read access (reported at discovery)",
            );
        },
        Reachability::Error => {
            return skipped(
                &compartment,
                SkipReason::TransientError,
                "compartment unreachable at discovery",
            );
        },
        Reachability::Reachable => {},
    }

    let collected = match collector::collect_compartment(inventory, &compartment.id) {
        Ok(collected) => collected,
        Err(CollectError::AccessDenied(detail)) => {
            return skipped(&compartment, SkipReason::AccessDenied, &detail);
        },
        Err(CollectError::Transient(detail)) => {
            return skipped(&compartment, SkipReason::TransientError, &detail);
        },
    };

    let records = correlator::correlate(&collected)
        .into_iter()
        .map(|view| classifier::classify(view, max_backup_age_days, evaluated_at))
        .collect();

    CompartmentOutcome::Audited {
        compartment,
        records,
    }
}

fn skipped(compartment: &Compartment, reason: SkipReason, detail: &str) -> CompartmentOutcome {
    CompartmentOutcome::Skipped {
        compartment_id: compartment.id.clone(),
        compartment_name: compartment.name.clone(),
        reason,
        detail: detail.to_string(),
    }
}
