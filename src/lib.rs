//! # SAX - Suffix Array eXplorer
//!
//! SAX builds a lexicographically sorted index of every suffix of a text and
//! answers rank, selection and longest-common-prefix queries over it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix array construction and queries, and a 256-way trie
//! - [`search`] - Clients: keyword in context, repeated/common substrings,
//!   spell checking and autocomplete
//! - [`output`] - Terminal formatting for the `sax` binary
//! - [`utils`] - File loading and progress display for the `sax` binary
//!
//! ## Quick Start
//!
//! ```
//! use sax::SuffixArray;
//!
//! let sa = SuffixArray::new("ABRACADABRA!");
//!
//! assert_eq!(sa.len(), 12);
//! assert_eq!(sa.offset_of(3).unwrap(), 0);
//! assert_eq!(sa.suffix_string(3).unwrap(), "ABRACADABRA!");
//! assert_eq!(sa.lcp(3).unwrap(), 4);
//! assert_eq!(sa.rank(b"ABRAC"), 3);
//! assert_eq!(sa.count(b"ABRA"), 2);
//! ```
//!
//! ## Construction
//!
//! Suffix offsets are sorted in place with a 3-way radix quicksort keyed on
//! the byte at increasing depth, switching to insertion sort for small
//! ranges. The text and offsets are frozen once built, so a `SuffixArray`
//! can be shared across threads without locking.

pub mod error;
pub mod index;
pub mod output;
pub mod search;
pub mod utils;

pub use error::{Error, Result};
pub use index::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayStats, TrieMap};
