//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing without
//! real I/O operations.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use volaudit::core::models::{Compartment, CompartmentInventory};
use volaudit::core::ports::{Clock, CompartmentSource, InventorySource, ObjectStore, UploadedArtifact};
use volaudit::error::CollectError;

/// Compartment source returning a fixed list
pub struct MockCompartmentSource {
    compartments: Vec<Compartment>,
}

impl MockCompartmentSource {
    pub fn new(compartments: Vec<Compartment>) -> Self {
        Self { compartments }
    }
}

impl CompartmentSource for MockCompartmentSource {
    fn discover(&self, root_scope: Option<&str>) -> anyhow::Result<Vec<Compartment>> {
        let compartments = match root_scope {
            None => self.compartments.clone(),
            Some(root) => self.compartments.iter().filter(|c| c.id == root).cloned().collect(),
        };
        Ok(compartments)
    }
}

/// Inventory source with per-compartment canned results
pub struct MockInventorySource {
    inventories: HashMap<String, CompartmentInventory>,
    failures: HashMap<String, CollectError>,
}

impl MockInventorySource {
    pub fn new() -> Self {
        Self {
            inventories: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    pub fn with_inventory(mut self, compartment_id: &str, inventory: CompartmentInventory) -> Self {
        self.inventories.insert(compartment_id.to_string(), inventory);
        self
    }

    pub fn with_failure(mut self, compartment_id: &str, failure: CollectError) -> Self {
        self.failures.insert(compartment_id.to_string(), failure);
        self
    }
}

impl Default for MockInventorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySource for MockInventorySource {
    fn collect(&self, compartment_id: &str) -> Result<CompartmentInventory, CollectError> {
        if let Some(failure) = self.failures.get(compartment_id) {
            return Err(failure.clone());
        }
        Ok(self.inventories.get(compartment_id).cloned().unwrap_or_default())
    }
}

/// Clock pinned to one instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Object store keeping uploads in memory
pub struct MemoryObjectStore {
    objects: Mutex<Vec<(String, Vec<u8>, String)>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
        }
    }

    pub fn object_names(&self) -> Vec<String> {
        self.objects.lock().unwrap().iter().map(|(name, _, _)| name.clone()).collect()
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for MemoryObjectStore {
    fn put(
        &self,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> anyhow::Result<UploadedArtifact> {
        self.objects.lock().unwrap().push((
            object_name.to_string(),
            body.to_vec(),
            content_type.to_string(),
        ));
        Ok(UploadedArtifact {
            namespace: "mock-ns".to_string(),
            bucket: "mock-bucket".to_string(),
            object_name: object_name.to_string(),
            uri: format!("mem://mock-bucket/{object_name}"),
        })
    }
}
