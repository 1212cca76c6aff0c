//! Report rendering for human, JSON and Markdown consumers
//!
//! The JSON and Markdown documents are derived from the same
//! [`AuditReport`] and are byte-stable for identical inputs, which keeps
//! successive runs diffable.

use colored::Colorize;

use crate::core::models::{AuditReport, ClassifiedRecord, CompartmentOutcome};

/// Non-compliant rows shown in the Markdown findings table
const MARKDOWN_FINDINGS_LIMIT: usize = 50;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Serialize the report as pretty-printed JSON
pub fn render_json(report: &AuditReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report to the console in the requested mode
pub fn render_console(report: &AuditReport, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", render_json(report)?),
        OutputMode::Human => render_human(report),
    }
    Ok(())
}

fn render_human(report: &AuditReport) {
    let summary = &report.summary;
    println!(
        "Audited {} compartment(s), {} skipped, {} volume(s) classified.\n",
        summary.audited_compartment_count, summary.skipped_compartment_count, summary.total_volumes
    );
    println!("  {} {}", "compliant:".green(), summary.compliant_count);
    println!("  {} {}", "stale backup:".yellow(), summary.stale_backup_count);
    println!("  {} {}", "no backup:".red(), summary.no_backup_count);

    for outcome in &report.outcomes {
        match outcome {
            CompartmentOutcome::Skipped { compartment_name, reason, detail, .. } => {
                println!(
                    "\n{} {compartment_name} ({reason}): {detail}",
                    "skipped".red().bold()
                );
            },
            CompartmentOutcome::Audited { compartment, records } => {
                let non_compliant =
                    records.iter().filter(|r| r.verdict.status.is_non_compliant()).count();
                if non_compliant > 0 {
                    println!(
                        "\n{} {}: {non_compliant} non-compliant volume(s)",
                        "attention".yellow().bold(),
                        compartment.name
                    );
                    for record in records.iter().filter(|r| r.verdict.status.is_non_compliant()) {
                        println!(
                            "  [{}] {} ({})",
                            record.verdict.status,
                            record.view.volume.display_name,
                            record.view.volume.kind
                        );
                    }
                }
            },
        }
    }
}

/// Render the report as a Markdown document
#[must_use]
pub fn render_markdown(report: &AuditReport) -> String {
    let summary = &report.summary;
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Volume Backup Posture Audit".to_string());
    lines.push(String::new());
    lines.push(format!("- Generated (UTC): `{}`", report.generated_at.to_rfc3339()));
    lines.push(format!("- Max Backup Age (days): `{}`", report.max_backup_age_days));
    lines.push(String::new());

    lines.push("## Summary".to_string());
    lines.push(String::new());
    lines.push("| Metric | Value |".to_string());
    lines.push("|---|---:|".to_string());
    lines.push(format!("| Audited Compartments | {} |", summary.audited_compartment_count));
    lines.push(format!("| Skipped Compartments | {} |", summary.skipped_compartment_count));
    lines.push(format!("| Total Volumes | {} |", summary.total_volumes));
    lines.push(format!("| Compliant | {} |", summary.compliant_count));
    lines.push(format!("| Stale Backup | {} |", summary.stale_backup_count));
    lines.push(format!("| No Backup | {} |", summary.no_backup_count));
    lines.push(format!("| Non-Compliant | {} |", summary.non_compliant_count));
    lines.push(String::new());

    if !summary.availability_domains.is_empty() {
        lines.push("## Availability Domain Summary".to_string());
        lines.push(String::new());
        lines.push("| Availability Domain | Total Volumes | Non-Compliant |".to_string());
        lines.push("|---|---:|---:|".to_string());
        for (ad, tally) in &summary.availability_domains {
            lines.push(format!("| {ad} | {} | {} |", tally.total, tally.non_compliant));
        }
        lines.push(String::new());
    }

    let skipped: Vec<&CompartmentOutcome> = report
        .outcomes
        .iter()
        .filter(|o| matches!(o, CompartmentOutcome::Skipped { .. }))
        .collect();
    if !skipped.is_empty() {
        lines.push("## Skipped Compartments".to_string());
        lines.push(String::new());
        lines.push("| Compartment | Reason | Detail |".to_string());
        lines.push("|---|---|---|".to_string());
        for outcome in skipped {
            if let CompartmentOutcome::Skipped { compartment_name, reason, detail, .. } = outcome {
                lines.push(format!("| {compartment_name} | {reason} | {detail} |"));
            }
        }
        lines.push(String::new());
    }

    push_findings_table(&mut lines, report);
    push_compartment_sections(&mut lines, report);

    lines.push(String::new());
    lines.join("\n")
}

fn push_findings_table(lines: &mut Vec<String>, report: &AuditReport) {
    lines.push(format!("## Non-Compliant Findings (Top {MARKDOWN_FINDINGS_LIMIT})"));
    lines.push(String::new());
    lines.push("| Kind | Compartment | Volume | Status | Backup Age (days) | Attached Instance |".to_string());
    lines.push("|---|---|---|---|---:|---|".to_string());

    let mut any = false;
    let non_compliant = report
        .outcomes
        .iter()
        .filter_map(|o| match o {
            CompartmentOutcome::Audited { compartment, records } => {
                Some(records.iter().map(move |r| (compartment, r)))
            },
            CompartmentOutcome::Skipped { .. } => None,
        })
        .flatten()
        .filter(|(_, r)| r.verdict.status.is_non_compliant())
        .take(MARKDOWN_FINDINGS_LIMIT);

    for (compartment, record) in non_compliant {
        any = true;
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            record.view.volume.kind,
            compartment.name,
            record.view.volume.display_name,
            record.verdict.status,
            age_cell(record),
            instance_cell(record),
        ));
    }
    if !any {
        lines.push("| - | - | - | All volumes compliant | - | - |".to_string());
    }
    lines.push(String::new());
}

fn push_compartment_sections(lines: &mut Vec<String>, report: &AuditReport) {
    lines.push("## Compartments".to_string());
    lines.push(String::new());

    for outcome in &report.outcomes {
        let CompartmentOutcome::Audited { compartment, records } = outcome else {
            continue;
        };
        lines.push(format!("### {}", compartment.name));
        lines.push(String::new());
        if records.is_empty() {
            lines.push("No volumes in this compartment.".to_string());
            lines.push(String::new());
            continue;
        }
        lines.push("| Volume | Kind | Status | Backup Age (days) | Attached Instance |".to_string());
        lines.push("|---|---|---|---:|---|".to_string());
        for record in records {
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                record.view.volume.display_name,
                record.view.volume.kind,
                record.verdict.status,
                age_cell(record),
                instance_cell(record),
            ));
        }
        lines.push(String::new());
    }
}

fn age_cell(record: &ClassifiedRecord) -> String {
    record
        .verdict
        .backup_age_days
        .map_or_else(|| "N/A".to_string(), |age| age.to_string())
}

fn instance_cell(record: &ClassifiedRecord) -> String {
    record
        .view
        .attached_instance
        .as_ref()
        .map_or_else(|| "-".to_string(), |i| i.instance_name.clone())
}
