//! Run a full audit pass

use std::path::PathBuf;

use volaudit::adapters::clock::SystemClock;
use volaudit::adapters::object_store::LocalObjectStore;
use volaudit::adapters::snapshot::SnapshotSource;
use volaudit::config::AuditConfig;
use volaudit::core::ports::ObjectStore;
use volaudit::core::services::orchestrator::{self, AuditPolicy};
use volaudit::output::{self, OutputMode};
use volaudit::report_io::{self, WrittenArtifacts};

/// Flag and override inputs for the `run` command
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Tenancy snapshot file to audit
    pub snapshot: PathBuf,
    /// Threshold override
    pub max_age_days: Option<u32>,
    /// Root compartment scope override
    pub root: Option<String>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Do not upload artifacts
    pub skip_upload: bool,
    /// Local object store root override
    pub store_root: Option<PathBuf>,
    /// Namespace override
    pub namespace: Option<String>,
    /// Bucket override
    pub bucket: Option<String>,
    /// Prefix override
    pub prefix: Option<String>,
}

/// Execute the audit: discover, collect, classify, report, upload
pub fn run_audit(args: &RunArgs, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = AuditConfig::load();
    apply_overrides(&mut config, args);
    config.validate(args.skip_upload)?;

    let source = SnapshotSource::load(&args.snapshot)?;
    let clock = SystemClock::new();
    let policy = AuditPolicy {
        max_backup_age_days: config.max_backup_age_days,
        root_scope: config.root_compartment.clone(),
    };

    let report = orchestrator::run_audit(&source, &source, &clock, &policy)?;
    let artifacts = report_io::write_reports(&report, &config.output_dir)?;
    output::render_console(&report, mode)?;

    if args.skip_upload {
        log::info!("upload skipped by flag --skip-upload");
        return Ok(());
    }

    if !upload_artifacts(&config, args, &artifacts) && config.fail_on_upload_error {
        std::process::exit(2);
    }
    Ok(())
}

fn apply_overrides(config: &mut AuditConfig, args: &RunArgs) {
    if let Some(days) = args.max_age_days {
        config.max_backup_age_days = days;
    }
    if let Some(root) = &args.root {
        config.root_compartment = Some(root.clone());
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir.clone_from(dir);
    }
    if let Some(namespace) = &args.namespace {
        config.object_storage.namespace.clone_from(namespace);
    }
    if let Some(bucket) = &args.bucket {
        config.object_storage.bucket = Some(bucket.clone());
    }
    if let Some(prefix) = &args.prefix {
        config.object_storage.prefix = prefix.trim_matches('/').to_string();
    }
}

/// Upload both artifacts; returns false when any upload failed
fn upload_artifacts(config: &AuditConfig, args: &RunArgs, artifacts: &WrittenArtifacts) -> bool {
    let Some(bucket) = config.object_storage.bucket.as_deref() else {
        // validate() already enforces this when uploads are enabled
        return false;
    };
    let store_root = args.store_root.clone().unwrap_or_else(default_store_root);
    let store = LocalObjectStore::new(
        store_root,
        config.object_storage.namespace.clone(),
        bucket,
        config.object_storage.prefix.clone(),
    );

    let files = [
        (&artifacts.json_path, "application/json"),
        (&artifacts.markdown_path, "text/markdown"),
    ];
    for (path, content_type) in files {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            log::error!("artifact path has no file name: {}", path.display());
            return false;
        };
        let body = match std::fs::read(path) {
            Ok(body) => body,
            Err(err) => {
                log::error!("failed to read artifact {}: {err}", path.display());
                return false;
            },
        };
        match store.put(&store.object_name(file_name), &body, content_type) {
            Ok(uploaded) => log::info!("uploaded: {}", uploaded.uri),
            Err(err) => {
                log::error!("upload failed for {file_name}: {err:#}");
                return false;
            },
        }
    }
    true
}

fn default_store_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("volaudit")
        .join("object-store")
}
