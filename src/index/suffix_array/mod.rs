//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays
//! over a single immutable text.
//!
//! ## Architecture
//!
//! - `builder`: Sorts suffix offsets with 3-way radix quicksort
//! - `query`: Rank, selection, LCP and prefix-range queries
//! - `compare`: Byte comparison primitives over the shared text
//! - `types`: Configuration and statistics
//!
//! ## Order
//!
//! Suffixes are ordered by unsigned byte value. When one suffix is a prefix
//! of another, the shorter one sorts first.

pub mod builder;
pub mod compare;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use query::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats, TextPosition};
