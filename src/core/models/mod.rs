//! Domain models for volaudit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Compartment`] - A tenancy scoping boundary discovered once per run
//! - [`VolumeRecord`] / [`BackupRecord`] / [`AttachmentRecord`] - Raw
//!   per-compartment inventory
//! - [`UnifiedVolumeView`] - One correlated record per volume
//! - [`ComplianceVerdict`] - The staleness classification for a volume
//! - [`AuditReport`] - The immutable root aggregate of a run

mod attachment;
mod backup;
mod compartment;
mod inventory;
mod report;
mod verdict;
mod view;
mod volume;

pub use attachment::AttachmentRecord;
pub use backup::BackupRecord;
pub use compartment::{Compartment, Reachability};
pub use inventory::CompartmentInventory;
pub use report::{AdTally, AuditReport, AuditSummary, CompartmentOutcome, SkipReason};
pub use verdict::{ComplianceVerdict, VerdictStatus};
pub use view::{ClassifiedRecord, InstanceRef, UnifiedVolumeView};
pub use volume::{VolumeKind, VolumeRecord};
