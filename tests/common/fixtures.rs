//! Builders for domain fixtures
//!
//! All timestamps hang off a fixed evaluation instant so tests are
//! reproducible regardless of when they run.

use chrono::{DateTime, Duration, TimeZone, Utc};
use volaudit::core::models::{
    AttachmentRecord, BackupRecord, Compartment, CompartmentInventory, VolumeKind, VolumeRecord,
};

/// The fixed evaluation instant used across tests
pub fn eval_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

pub fn compartment(id: &str, name: &str) -> Compartment {
    Compartment::new(id, name)
}

pub fn volume(id: &str, compartment_id: &str) -> VolumeRecord {
    VolumeRecord {
        id: id.to_string(),
        kind: VolumeKind::Block,
        compartment_id: compartment_id.to_string(),
        display_name: format!("vol-{id}"),
        size_gbs: Some(50),
        availability_domain: Some("AD-1".to_string()),
        lifecycle_state: "AVAILABLE".to_string(),
        time_created: eval_instant() - Duration::days(365),
    }
}

/// A backup taken `age_days` before the evaluation instant
pub fn backup(id: &str, volume_id: &str, age_days: i64) -> BackupRecord {
    BackupRecord {
        id: id.to_string(),
        volume_id: volume_id.to_string(),
        time_created: eval_instant() - Duration::days(age_days),
        lifecycle_state: "AVAILABLE".to_string(),
    }
}

pub fn attachment(volume_id: &str, instance_id: &str) -> AttachmentRecord {
    AttachmentRecord {
        volume_id: volume_id.to_string(),
        instance_id: instance_id.to_string(),
        instance_name: format!("inst-{instance_id}"),
        lifecycle_state: "ATTACHED".to_string(),
        time_created: eval_instant() - Duration::days(30),
    }
}

pub fn inventory(
    volumes: Vec<VolumeRecord>,
    backups: Vec<BackupRecord>,
    attachments: Vec<AttachmentRecord>,
) -> CompartmentInventory {
    CompartmentInventory {
        volumes,
        backups,
        attachments,
    }
}
