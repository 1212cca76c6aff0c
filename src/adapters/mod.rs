//! Port implementations
//!
//! - [`clock`] - System clock
//! - [`snapshot`] - JSON tenancy snapshot as compartment/inventory source
//! - [`object_store`] - Local filesystem object store

pub mod clock;
pub mod object_store;
pub mod snapshot;
