//! Error taxonomy for the audit core
//!
//! Per-compartment collection failures are captured as data
//! ([`CollectError`] becomes a skipped-compartment outcome) and never
//! propagate past the orchestrator. Only configuration errors abort a run.

use thiserror::Error;

/// Failure to collect one compartment's inventory
///
/// The orchestrator records these as skipped compartments and keeps going;
/// they are never fatal to the run.
#[derive(Debug, Clone, Error)]
pub enum CollectError {
    /// The caller lacks read access to the compartment. Expected for
    /// partially visible tenancies.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// A listing call failed for a reason other than authorization.
    /// The core performs no retries; retry policy belongs to the client
    /// behind the [`InventorySource`](crate::core::ports::InventorySource)
    /// port.
    #[error("collection failed: {0}")]
    Transient(String),
}

/// Invalid run configuration
///
/// Raised before any collection begins; always fatal.
#[derive(Debug, Clone, Copy, Error)]
pub enum ConfigError {
    /// The staleness threshold must be at least one day
    #[error("max backup age must be a positive number of days, got {0}")]
    InvalidThreshold(i64),

    /// The object storage bucket is required when uploading
    #[error("object storage bucket is not configured; set it or pass --skip-upload")]
    MissingBucket,
}
