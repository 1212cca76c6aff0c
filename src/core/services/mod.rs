//! Audit services
//!
//! - [`collector`] - Per-compartment inventory retrieval over the port
//! - [`correlator`] - Pure merge of volumes, backups and attachments
//! - [`classifier`] - Staleness policy evaluation
//! - [`report`] - Tenancy-wide report accumulation
//! - [`orchestrator`] - Drives the whole pass

pub mod classifier;
pub mod collector;
pub mod correlator;
pub mod orchestrator;
pub mod report;
