//! Inventory collector
//!
//! Thin service over the [`InventorySource`] port: one attempt per
//! compartment, no retries, failures surfaced as typed data for the
//! orchestrator to record.

use crate::core::models::CompartmentInventory;
use crate::core::ports::InventorySource;
use crate::error::CollectError;

/// Collect one compartment's inventory
///
/// Returns the full triple on success (possibly with empty lists) or the
/// typed failure from the listing calls. Authorization failures and
/// transient failures are both non-fatal to the run; the caller records
/// them and moves on.
pub fn collect_compartment(
    source: &dyn InventorySource,
    compartment_id: &str,
) -> Result<CompartmentInventory, CollectError> {
    let inventory = source.collect(compartment_id)?;
    log::debug!(
        "collected compartment {compartment_id}: {} volume(s), {} backup(s), {} attachment(s)",
        inventory.volumes.len(),
        inventory.backups.len(),
        inventory.attachments.len()
    );
    Ok(inventory)
}
