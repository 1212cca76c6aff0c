//! Correlator - merges one compartment's inventory into per-volume views
//!
//! Pure function, no I/O: given {volumes, backups, attachments}, produce
//! exactly one [`UnifiedVolumeView`] per volume, in input order. Volumes
//! absent from the backup or attachment maps get empty/absent fields.

use std::collections::HashMap;

use crate::core::models::{
    AttachmentRecord, BackupRecord, CompartmentInventory, InstanceRef, UnifiedVolumeView,
};

/// Correlate a compartment inventory into unified per-volume views
///
/// Output order equals the input volume order. Backups within each view
/// are sorted newest-first; timestamp ties are broken by descending backup
/// id so repeated runs on the same input produce identical output.
#[must_use]
pub fn correlate(inventory: &CompartmentInventory) -> Vec<UnifiedVolumeView> {
    let mut backups_by_volume: HashMap<&str, Vec<&BackupRecord>> = HashMap::new();
    for backup in &inventory.backups {
        backups_by_volume.entry(backup.volume_id.as_str()).or_default().push(backup);
    }

    let mut attachment_by_volume: HashMap<&str, &AttachmentRecord> = HashMap::new();
    for attachment in inventory.attachments.iter().filter(|a| a.is_attached()) {
        match attachment_by_volume.entry(attachment.volume_id.as_str()) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(attachment);
            },
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                // At most one active attachment per volume is expected.
                // Resolve by most-recently-created, then instance id.
                log::warn!(
                    "volume {} has multiple active attachments ({} and {}); keeping the most recent",
                    attachment.volume_id,
                    slot.get().instance_id,
                    attachment.instance_id
                );
                let keep_new = (attachment.time_created, &attachment.instance_id)
                    > (slot.get().time_created, &slot.get().instance_id);
                if keep_new {
                    slot.insert(attachment);
                }
            },
        }
    }

    inventory
        .volumes
        .iter()
        .map(|volume| {
            let mut backups: Vec<BackupRecord> = backups_by_volume
                .get(volume.id.as_str())
                .map(|refs| refs.iter().map(|b| (*b).clone()).collect())
                .unwrap_or_default();
            // Newest first; equal timestamps ordered by descending id
            backups.sort_by(|a, b| {
                (b.time_created, &b.id).cmp(&(a.time_created, &a.id))
            });
            let latest_backup_at = backups.first().map(|b| b.time_created);

            let attached_instance =
                attachment_by_volume.get(volume.id.as_str()).map(|a| InstanceRef {
                    instance_id: a.instance_id.clone(),
                    instance_name: a.instance_name.clone(),
                });

            UnifiedVolumeView {
                volume: volume.clone(),
                backups,
                latest_backup_at,
                attached_instance,
            }
        })
        .collect()
}
