//! Order-preserving substring filter

use crate::search::document::SearchDocument;

/// Query-filtered views over immutable record snapshots
pub struct SearchIndex;

impl SearchIndex {
    /// Filter `records` down to those whose haystack contains `query` as a
    /// case-insensitive substring, preserving relative order.
    ///
    /// An empty query returns the whole snapshot unchanged. The snapshot is
    /// never mutated; the view borrows from it.
    pub fn filter<'a, D: SearchDocument>(records: &'a [D], query: &str) -> Vec<&'a D> {
        if query.is_empty() {
            return records.iter().collect();
        }

        let needle = query.to_lowercase();
        let hits: Vec<&D> = records
            .iter()
            .filter(|record| record.haystack().contains(&needle))
            .collect();

        tracing::debug!(
            query = %query,
            total = records.len(),
            matched = hits.len(),
            "filtered record snapshot"
        );

        hits
    }

    /// Check whether a single record matches `query`
    pub fn matches<D: SearchDocument>(record: &D, query: &str) -> bool {
        query.is_empty() || record.haystack().contains(&query.to_lowercase())
    }
}
