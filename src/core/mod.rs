//! Core domain logic for volaudit
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Compartment, VolumeRecord, AuditReport, ...)
//! - `services/` - Collection, correlation, classification, report building
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
