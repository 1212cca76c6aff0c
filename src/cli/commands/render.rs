//! Re-render Markdown from an existing JSON report

use std::fs;
use std::path::Path;

use volaudit::core::models::AuditReport;
use volaudit::output;

/// Read a JSON report and emit its Markdown rendering
///
/// Writes to `output` when given, stdout otherwise. Because both
/// documents derive from the same aggregate, this reproduces the Markdown
/// artifact of the original run exactly.
pub fn render(report_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let content = fs::read_to_string(report_path)?;
    let report: AuditReport = serde_json::from_str(&content)?;
    let markdown = output::render_markdown(&report);

    match output {
        Some(path) => {
            fs::write(path, markdown)?;
            log::info!("Markdown written: {}", path.display());
        },
        None => print!("{markdown}"),
    }
    Ok(())
}
