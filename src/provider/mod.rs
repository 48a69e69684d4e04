//! Record providers: validated, normalized snapshots for the core
//!
//! The search and aggregation engines never construct, update, or delete
//! records; they only derive views. Providers own that boundary: they
//! validate raw upstream data (closed-enum labels, field constraints) and
//! hand the core immutable, already-canonical snapshots. Today the only
//! provider is the static fixture set; a future API client slots in behind
//! the same trait.

mod fixtures;
mod raw;

pub use fixtures::FixtureProvider;
pub use raw::{Normalizer, RawAgent, RawAlert};

use crate::error::Result;
use crate::models::{Agent, Alert};

/// Supplies immutable record snapshots to the search and aggregation core
pub trait RecordProvider {
    /// Ordered snapshot of agent records
    fn agents(&self) -> Result<Vec<Agent>>;

    /// Ordered snapshot of alert records
    fn alerts(&self) -> Result<Vec<Alert>>;
}
