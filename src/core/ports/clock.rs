//! Clock port
//!
//! All verdicts in one report are computed against a single instant, read
//! once at the start of classification. Abstracting the clock keeps the
//! classifier deterministic under test.

use chrono::{DateTime, Utc};

/// Supplies the run's single evaluation instant
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now_utc(&self) -> DateTime<Utc>;
}
