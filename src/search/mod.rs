//! Text-search clients built on the suffix array and the trie
//!
//! - [`kwic`] - Keyword-in-context occurrences
//! - [`substrings`] - Longest repeated and longest common substrings
//! - [`spell`] - Spell checking and autocomplete over a word list

pub mod kwic;
pub mod spell;
pub mod substrings;

pub use kwic::{kwic, KwicHit};
pub use spell::Dictionary;
pub use substrings::{
    longest_common_substring, longest_repeated_substring, CommonSubstring, Substring,
};
