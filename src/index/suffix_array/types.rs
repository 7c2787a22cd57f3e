//! Types for suffix array indexing
//!
//! This module defines the configuration and statistics types shared by the
//! builder and the query layer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Position in the text buffer
pub type TextPosition = usize;

/// Ranges at or below this size are finished with insertion sort
pub const DEFAULT_INSERTION_CUTOFF: usize = 8;

/// Key returned for a position past the end of the text.
///
/// Lower than every byte, so an exhausted suffix sorts first.
pub const END_OF_TEXT: i16 = -1;

/// Configuration for suffix array building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixArrayConfig {
    /// Range size at which the radix quicksort hands over to insertion sort
    /// (default: 8)
    pub insertion_cutoff: usize,
    /// Build case-insensitive SA by ASCII-lowercasing text and keys
    /// (default: false)
    pub case_insensitive: bool,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            insertion_cutoff: DEFAULT_INSERTION_CUTOFF,
            case_insensitive: false,
        }
    }
}

impl SuffixArrayConfig {
    /// Check the configuration before building with it
    pub fn validate(&self) -> Result<()> {
        if self.insertion_cutoff == 0 {
            return Err(Error::InvalidConfig(
                "insertion_cutoff must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Statistics about a built suffix array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixArrayStats {
    /// Size of the text in bytes
    pub text_size: usize,
    /// Number of suffixes (equals text_size)
    pub suffix_count: usize,
    /// Largest LCP between adjacent suffixes (0 for fewer than two suffixes)
    pub max_lcp: usize,
    /// Insertion sort cutoff used at build time
    pub insertion_cutoff: usize,
    /// Whether the SA was built case-insensitive
    pub case_insensitive: bool,
}
