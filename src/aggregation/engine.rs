//! Category tallies over record snapshots

use std::fmt::Display;

use serde::Serialize;

use crate::aggregation::error::{AggregationError, AggregationResult};
use crate::models::{AgentStatus, Severity};

/// A categorical attribute with a fixed canonical display order
pub trait Category: Copy + Eq + Display {
    /// Canonical display order, independent of data arrival order
    fn canonical_order() -> &'static [Self];
}

impl Category for AgentStatus {
    fn canonical_order() -> &'static [Self] {
        &AgentStatus::CANONICAL_ORDER
    }
}

impl Category for Severity {
    fn canonical_order() -> &'static [Self] {
        &Severity::CANONICAL_ORDER
    }
}

/// A single category tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount<C> {
    pub category: C,
    pub count: u64,
}

/// Ordered category→count roll-ups over record snapshots
pub struct AggregationEngine;

impl AggregationEngine {
    /// Count records per category, in the category type's canonical order.
    ///
    /// Every canonical category appears in the output, zero-count categories
    /// included, and the tallies sum to the snapshot length.
    pub fn count_by<R, C, F>(records: &[R], selector: F) -> AggregationResult<Vec<CategoryCount<C>>>
    where
        C: Category + 'static,
        F: Fn(&R) -> C,
    {
        Self::count_by_with_order(records, selector, C::canonical_order())
    }

    /// Count records per category, in an explicit caller-specified order.
    ///
    /// A selector result outside `order` is a configuration error, surfaced
    /// immediately rather than silently coerced, since guessing a category
    /// would corrupt downstream counts.
    pub fn count_by_with_order<R, C, F>(
        records: &[R],
        selector: F,
        order: &[C],
    ) -> AggregationResult<Vec<CategoryCount<C>>>
    where
        C: Category,
        F: Fn(&R) -> C,
    {
        if order.is_empty() {
            return Err(AggregationError::InvalidOrder(
                "canonical order is empty".to_string(),
            ));
        }
        for (i, category) in order.iter().enumerate() {
            if order[..i].contains(category) {
                return Err(AggregationError::InvalidOrder(format!(
                    "duplicate category '{}'",
                    category
                )));
            }
        }

        let mut counts = vec![0u64; order.len()];
        for record in records {
            let category = selector(record);
            let slot = order.iter().position(|c| *c == category).ok_or_else(|| {
                AggregationError::CategoryOutsideOrder {
                    category: category.to_string(),
                    expected: order.iter().map(|c| c.to_string()).collect(),
                }
            })?;
            counts[slot] += 1;
        }

        tracing::debug!(
            total = records.len(),
            categories = order.len(),
            "aggregated record snapshot"
        );

        Ok(order
            .iter()
            .zip(counts)
            .map(|(category, count)| CategoryCount {
                category: *category,
                count,
            })
            .collect())
    }
}
