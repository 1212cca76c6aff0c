//! Report builder
//!
//! Accumulates per-compartment outcomes in input order and derives the
//! run summary. Holds no hidden state: building twice from the same
//! inputs yields the same report.

use chrono::{DateTime, Utc};

use crate::core::models::{
    AuditReport, AuditSummary, CompartmentOutcome, VerdictStatus,
};

/// Accumulates [`CompartmentOutcome`]s into an [`AuditReport`]
#[derive(Debug)]
pub struct ReportBuilder {
    generated_at: DateTime<Utc>,
    max_backup_age_days: u32,
    outcomes: Vec<CompartmentOutcome>,
}

impl ReportBuilder {
    /// Start a report for a run evaluated at `generated_at` under the
    /// given threshold
    #[must_use]
    pub const fn new(generated_at: DateTime<Utc>, max_backup_age_days: u32) -> Self {
        Self {
            generated_at,
            max_backup_age_days,
            outcomes: Vec::new(),
        }
    }

    /// Append one compartment's outcome, preserving input order
    pub fn push(&mut self, outcome: CompartmentOutcome) {
        self.outcomes.push(outcome);
    }

    /// Finish the report, deriving summary counts from the outcomes
    ///
    /// Skipped compartments contribute only to the skipped count; verdict
    /// tallies scan classified records of audited compartments alone.
    #[must_use]
    pub fn build(self) -> AuditReport {
        let summary = summarize(&self.outcomes);
        AuditReport {
            generated_at: self.generated_at,
            max_backup_age_days: self.max_backup_age_days,
            outcomes: self.outcomes,
            summary,
        }
    }
}

fn summarize(outcomes: &[CompartmentOutcome]) -> AuditSummary {
    let mut summary = AuditSummary::default();

    for outcome in outcomes {
        match outcome {
            CompartmentOutcome::Skipped { .. } => {
                summary.skipped_compartment_count += 1;
            },
            CompartmentOutcome::Audited { records, .. } => {
                summary.audited_compartment_count += 1;
                for record in records {
                    summary.total_volumes += 1;
                    match record.verdict.status {
                        VerdictStatus::Compliant => summary.compliant_count += 1,
                        VerdictStatus::StaleBackup => summary.stale_backup_count += 1,
                        VerdictStatus::NoBackup => summary.no_backup_count += 1,
                    }

                    let ad = record
                        .view
                        .volume
                        .availability_domain
                        .clone()
                        .unwrap_or_else(|| "UNKNOWN_AD".to_string());
                    let tally = summary.availability_domains.entry(ad).or_default();
                    tally.total += 1;
                    if record.verdict.status.is_non_compliant() {
                        tally.non_compliant += 1;
                    }
                }
            },
        }
    }

    summary.non_compliant_count = summary.stale_backup_count + summary.no_backup_count;
    summary
}
