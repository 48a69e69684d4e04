//! Error types for aggregation operations

use crate::error::AppError;

/// Result type for aggregation operations
pub type AggregationResult<T> = std::result::Result<T, AggregationError>;

/// Errors that can occur in aggregation operations
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// Selector produced a category missing from the canonical order
    #[error("Selector returned category '{category}' outside the canonical order {expected:?}")]
    CategoryOutsideOrder {
        category: String,
        expected: Vec<String>,
    },

    /// Canonical order is unusable
    #[error("Invalid canonical order: {0}")]
    InvalidOrder(String),
}

impl From<AggregationError> for AppError {
    fn from(err: AggregationError) -> Self {
        AppError::Configuration(err.to_string())
    }
}
