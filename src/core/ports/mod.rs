//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the audit core and external
//! systems (the cloud control plane, the clock, object storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap a live API client for a snapshot file without
//!   touching the audit logic
//! - **Clarity**: Clear boundaries between layers

mod clock;
mod compartment_source;
mod inventory_source;
mod object_store;

pub use clock::Clock;
pub use compartment_source::CompartmentSource;
pub use inventory_source::InventorySource;
pub use object_store::{ObjectStore, UploadedArtifact};
