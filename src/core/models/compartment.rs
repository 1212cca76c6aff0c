//! Compartment model
//!
//! A compartment is the tenancy's scoping/isolation boundary. The set of
//! compartments is discovered once per audit run and never changes within it.

use serde::{Deserialize, Serialize};

/// Whether the caller could see into a compartment at discovery time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reachability {
    /// Listing calls are expected to succeed
    #[default]
    Reachable,
    /// The caller lacks read access; expected, non-fatal
    AccessDenied,
    /// Discovery saw the compartment but could not probe it
    Error,
}

impl std::fmt::Display for Reachability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reachable => write!(f, "REACHABLE"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A compartment as returned by discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compartment {
    /// Opaque compartment identifier (OCID or equivalent)
    pub id: String,

    /// Human-readable display name
    pub name: String,

    /// Parent compartment identifier, if any (root compartments have none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Reachability observed at discovery
    #[serde(default)]
    pub reachability: Reachability,
}

impl Compartment {
    /// Create a reachable compartment with no parent
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            reachability: Reachability::Reachable,
        }
    }
}
