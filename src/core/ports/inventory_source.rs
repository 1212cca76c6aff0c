//! Inventory listing port

use super::super::models::CompartmentInventory;
use crate::error::CollectError;

/// Lists volumes, backups and attachments for one compartment
///
/// Implementations must distinguish authorization failures
/// ([`CollectError::AccessDenied`]) from other failures
/// ([`CollectError::Transient`]). Retry policy, if any, lives behind this
/// port; the core performs a single attempt per compartment.
pub trait InventorySource: Send + Sync {
    /// Retrieve the full inventory triple for a compartment
    ///
    /// Empty lists are a valid success, not an error.
    fn collect(&self, compartment_id: &str) -> Result<CompartmentInventory, CollectError>;
}
