//! Report artifact writing and naming
//!
//! Artifacts are named deterministically from the run timestamp so a run
//! can be located (and re-uploaded) by its evaluation instant alone.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::models::AuditReport;
use crate::output;

/// Timestamp slug format used in artifact names
const SLUG_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Paths of the two written artifacts
#[derive(Debug, Clone)]
pub struct WrittenArtifacts {
    /// The machine-readable JSON report
    pub json_path: PathBuf,
    /// The human-readable Markdown report
    pub markdown_path: PathBuf,
}

/// Deterministic artifact base name for a run timestamp
#[must_use]
pub fn artifact_basename(generated_at: DateTime<Utc>) -> String {
    format!("volume_backup_posture_{}", generated_at.format(SLUG_FORMAT))
}

/// Write the JSON and Markdown artifacts under `output_dir`
///
/// Creates the directory if needed; overwrites artifacts from a previous
/// run with the same timestamp.
pub fn write_reports(report: &AuditReport, output_dir: &Path) -> anyhow::Result<WrittenArtifacts> {
    fs::create_dir_all(output_dir)?;

    let base = artifact_basename(report.generated_at);
    let json_path = output_dir.join(format!("{base}.json"));
    let markdown_path = output_dir.join(format!("{base}.md"));

    fs::write(&json_path, output::render_json(report)?)?;
    fs::write(&markdown_path, output::render_markdown(report))?;

    log::info!("JSON report written: {}", json_path.display());
    log::info!("Markdown report written: {}", markdown_path.display());

    Ok(WrittenArtifacts {
        json_path,
        markdown_path,
    })
}
