//! Suffix array builder
//!
//! Builds a suffix array from a single text by:
//! 1. Starting from the identity permutation of suffix offsets
//! 2. Sorting the offsets in place with a 3-way radix quicksort keyed by the
//!    byte at increasing depth, finishing small ranges with insertion sort
//!
//! Only offsets are moved; suffixes are compared through the shared text.

use super::compare::{compare_suffixes, key_at};
use super::query::SuffixArray;
use super::types::*;
use crate::error::Result;
use std::time::Instant;
use tracing::debug;

/// Builder for constructing suffix arrays from text
#[derive(Debug, Clone)]
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: SuffixArrayConfig::default(),
        }
    }

    /// Configuration this builder sorts with
    pub fn config(&self) -> &SuffixArrayConfig {
        &self.config
    }

    /// Build the suffix array for `text`, taking ownership of it
    ///
    /// This is the main computation. The returned index is immutable.
    pub fn build(self, text: impl Into<Vec<u8>>) -> SuffixArray {
        let mut text = text.into();
        if self.config.case_insensitive {
            text.make_ascii_lowercase();
        }

        let start = Instant::now();
        let offsets = sort_suffixes(&text, self.config.insertion_cutoff);

        debug!(
            text_size = text.len(),
            cutoff = self.config.insertion_cutoff,
            elapsed_us = start.elapsed().as_micros() as u64,
            "built suffix array"
        );

        SuffixArray::from_parts(text.into_boxed_slice(), offsets.into_boxed_slice(), self.config)
    }
}

/// Range of the offset array still to be sorted
#[derive(Debug, Clone, Copy)]
struct Pending {
    lo: usize,
    hi: usize,
    /// Bytes already known equal across every suffix in `lo..hi`
    depth: usize,
}

/// Sort all suffix offsets of `text`
///
/// 3-way radix quicksort: partition on the byte at `depth`, then refine the
/// equal zone one byte deeper and the smaller/greater zones at the same
/// depth. Uses an explicit work stack instead of recursion so that highly
/// repetitive text (deep equal zones) cannot exhaust the call stack.
///
/// Time: O(n log n) expected for typical text
/// Space: O(n) for the offsets plus the work stack
pub(crate) fn sort_suffixes(text: &[u8], cutoff: usize) -> Vec<TextPosition> {
    let mut offsets: Vec<TextPosition> = (0..text.len()).collect();
    let mut stack = vec![Pending {
        lo: 0,
        hi: offsets.len(),
        depth: 0,
    }];

    while let Some(Pending { lo, hi, depth }) = stack.pop() {
        let range = &mut offsets[lo..hi];

        if range.len() <= cutoff {
            insertion_sort(text, range, depth);
            continue;
        }

        let (lt, gt, pivot) = partition(text, range, depth);

        let mut push = |lo: usize, hi: usize, depth: usize| {
            if hi - lo > 1 {
                stack.push(Pending { lo, hi, depth });
            }
        };

        push(lo + gt, hi, depth);
        // Suffixes that ended at this depth are fully sorted
        if pivot != END_OF_TEXT {
            push(lo + lt, lo + gt, depth + 1);
        }
        push(lo, lo + lt, depth);
    }

    offsets
}

/// Dijkstra 3-way partition of `range` on the byte at `depth`
///
/// Pivot is the key of the first element. On return `range[..lt]` is less
/// than the pivot, `range[lt..gt]` equal and `range[gt..]` greater.
fn partition(text: &[u8], range: &mut [TextPosition], depth: usize) -> (usize, usize, i16) {
    let pivot = key_at(text, range[0] + depth);
    let mut lt = 0;
    let mut gt = range.len();
    let mut i = 1;

    while i < gt {
        let key = key_at(text, range[i] + depth);
        if key < pivot {
            range.swap(lt, i);
            lt += 1;
            i += 1;
        } else if key > pivot {
            gt -= 1;
            range.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt, pivot)
}

/// Insertion sort of suffixes that share their first `depth` bytes
fn insertion_sort(text: &[u8], range: &mut [TextPosition], depth: usize) {
    for i in 1..range.len() {
        let mut j = i;
        while j > 0 && compare_suffixes(text, range[j], range[j - 1], depth).is_lt() {
            range.swap(j, j - 1);
            j -= 1;
        }
    }
}
