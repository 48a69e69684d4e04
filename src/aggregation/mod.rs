//! Category roll-ups for KPI tiles and proportional bars
//!
//! Summary tiles and severity/status bars need a total-preserving partition
//! of a record snapshot by one categorical attribute. Categories appear in a
//! fixed canonical order (e.g., `Active, Inactive, Disconnected`, or
//! `Critical, High, Medium, Low`) rather than discovery order, and a category
//! with zero matching records still appears with count 0, so downstream bars
//! and legends keep a stable layout as the underlying data changes.

mod engine;
mod error;

pub use engine::{AggregationEngine, Category, CategoryCount};
pub use error::{AggregationError, AggregationResult};
