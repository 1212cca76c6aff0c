//! Compartment discovery port

use super::super::models::Compartment;

/// Discovers the compartments an audit run will cover
///
/// Implementations return compartments in a stable order; the final report
/// preserves that order. An optional root scope restricts discovery to one
/// compartment subtree.
pub trait CompartmentSource: Send + Sync {
    /// List all visible compartments, in discovery order
    fn discover(&self, root_scope: Option<&str>) -> anyhow::Result<Vec<Compartment>>;
}
