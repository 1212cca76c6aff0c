//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use volaudit::output::OutputMode;

/// volaudit - Backup posture auditing for block and boot volumes
#[derive(Parser, Debug)]
#[command(
    name = "volaudit",
    version,
    about = "Audit block/boot volume backup posture across a cloud tenancy",
    long_about = "Audits every compartment the caller can see: inventories volumes,\n\
                  backups and attachments, classifies each volume against a backup\n\
                  staleness threshold, and emits a JSON + Markdown report.\n\
                  Compartments that cannot be read are recorded and skipped, never fatal."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a full audit pass and write report artifacts
    Run {
        /// Tenancy snapshot file to audit (JSON)
        #[arg(long)]
        snapshot: PathBuf,

        /// Maximum acceptable backup age in days (overrides config/env)
        #[arg(long)]
        max_age_days: Option<u32>,

        /// Restrict the audit to one compartment subtree
        #[arg(long)]
        root: Option<String>,

        /// Directory to write report artifacts to
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Generate local reports only, do not upload to object storage
        #[arg(long)]
        skip_upload: bool,

        /// Root directory of the local object store
        #[arg(long)]
        store_root: Option<PathBuf>,

        /// Object storage namespace
        #[arg(long)]
        namespace: Option<String>,

        /// Object storage bucket
        #[arg(long)]
        bucket: Option<String>,

        /// Object name prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Re-render the Markdown document from an existing JSON report
    Render {
        /// Path to a JSON report produced by `run`
        report: PathBuf,

        /// Write Markdown here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Run {
            snapshot,
            max_age_days,
            root,
            output_dir,
            skip_upload,
            store_root,
            namespace,
            bucket,
            prefix,
        } => commands::run_audit(
            &commands::RunArgs {
                snapshot,
                max_age_days,
                root,
                output_dir,
                skip_upload,
                store_root,
                namespace,
                bucket,
                prefix,
            },
            output_mode,
        ),
        Command::Render { report, output } => commands::render(&report, output.as_deref()),
        Command::Version => {
            println!("volaudit v{}", volaudit::VERSION);
            Ok(())
        },
    }
}
