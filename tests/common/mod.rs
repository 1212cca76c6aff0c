//! Shared test utilities

pub mod fixtures;
pub mod mocks;
