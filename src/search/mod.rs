//! Free-text search over record snapshots
//!
//! The console has a single search box that must match across every visible
//! column (id, name, IP, groups, OS, node, version, status) without
//! per-column query syntax. The contract is whole-record substring search:
//!
//! - each record is flattened into one lower-cased haystack
//!   ([`SearchDocument`]),
//! - a record matches iff the lower-cased query is a substring of that
//!   haystack, anywhere, contributed by any field,
//! - the output preserves the input's relative order (stable filter, not a
//!   re-sort), and
//! - an empty query is the identity transform.
//!
//! No AND/OR operators, field scoping, or ranking; the filter is a pure
//! function of the snapshot and the query.

mod document;
mod index;

pub use document::SearchDocument;
pub use index::SearchIndex;
