//! Tenancy snapshot adapter
//!
//! Implements both discovery and inventory listing from a single JSON
//! snapshot file. Used for offline audits, dry runs against exported
//! inventories, and tests; a live control-plane client implements the
//! same two ports.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{Compartment, CompartmentInventory};
use crate::core::ports::{CompartmentSource, InventorySource};
use crate::error::CollectError;

/// A collection failure scripted into the snapshot
///
/// Lets a snapshot reproduce the "reachable at discovery, failed at
/// listing" case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedFailure {
    /// Which failure class the listing calls report
    pub kind: FailureKind,
    /// Human-readable detail
    #[serde(default)]
    pub detail: String,
}

/// Failure class for [`ScriptedFailure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// Authorization failure
    AccessDenied,
    /// Any other listing failure
    Transient,
}

/// On-disk snapshot document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenancySnapshot {
    /// Compartments in discovery order
    #[serde(default)]
    pub compartments: Vec<Compartment>,

    /// Per-compartment inventories, keyed by compartment id; a missing
    /// entry means an empty compartment
    #[serde(default)]
    pub inventories: HashMap<String, CompartmentInventory>,

    /// Compartments whose listing calls fail, keyed by compartment id
    #[serde(default)]
    pub collect_failures: HashMap<String, ScriptedFailure>,
}

/// Snapshot-backed compartment and inventory source
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: TenancySnapshot,
}

impl SnapshotSource {
    /// Build a source from an in-memory snapshot
    #[must_use]
    pub const fn new(snapshot: TenancySnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: TenancySnapshot = serde_json::from_str(&content)?;
        log::debug!(
            "loaded snapshot {}: {} compartment(s)",
            path.display(),
            snapshot.compartments.len()
        );
        Ok(Self::new(snapshot))
    }

    /// Ids of the subtree rooted at `root`, following `parent_id` links
    ///
    /// Snapshots are user-authored, so the walk tolerates malformed links:
    /// an id is visited at most once, which terminates parent cycles and
    /// deduplicates compartments listed twice.
    fn subtree_ids(&self, root: &str) -> HashSet<String> {
        let mut seen = HashSet::from([root.to_string()]);
        let mut queue = vec![root.to_string()];
        while let Some(parent) = queue.pop() {
            for compartment in &self.snapshot.compartments {
                if compartment.parent_id.as_deref() == Some(parent.as_str())
                    && seen.insert(compartment.id.clone())
                {
                    queue.push(compartment.id.clone());
                }
            }
        }
        seen
    }
}

impl CompartmentSource for SnapshotSource {
    fn discover(&self, root_scope: Option<&str>) -> anyhow::Result<Vec<Compartment>> {
        let compartments = match root_scope {
            None => self.snapshot.compartments.clone(),
            Some(root) => {
                let scope = self.subtree_ids(root);
                self.snapshot
                    .compartments
                    .iter()
                    .filter(|c| scope.contains(&c.id))
                    .cloned()
                    .collect()
            },
        };
        Ok(compartments)
    }
}

impl InventorySource for SnapshotSource {
    fn collect(&self, compartment_id: &str) -> Result<CompartmentInventory, CollectError> {
        if let Some(failure) = self.snapshot.collect_failures.get(compartment_id) {
            return Err(match failure.kind {
                FailureKind::AccessDenied => CollectError::AccessDenied(failure.detail.clone()),
                FailureKind::Transient => CollectError::Transient(failure.detail.clone()),
            });
        }
        Ok(self.snapshot.inventories.get(compartment_id).cloned().unwrap_or_default())
    }
}
