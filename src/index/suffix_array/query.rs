//! Suffix array queries
//!
//! Provides rank, selection and LCP queries over a built suffix array, plus
//! O(m log n) prefix-range search on top of `rank`.

use super::builder::SuffixArrayBuilder;
use super::compare::{common_prefix_len, compare_with_key};
use super::types::*;
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::Range;

/// A sorted index of every suffix of an owned, immutable text
///
/// `offsets[i]` is the start of the i-th smallest suffix. Both the text and
/// the offsets are frozen after construction, so the index is `Send + Sync`
/// and can be queried from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    text: Box<[u8]>,
    offsets: Box<[TextPosition]>,
    config: SuffixArrayConfig,
}

impl SuffixArray {
    /// Build a suffix array with the default configuration
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        SuffixArrayBuilder::with_defaults().build(text)
    }

    pub(crate) fn from_parts(
        text: Box<[u8]>,
        offsets: Box<[TextPosition]>,
        config: SuffixArrayConfig,
    ) -> Self {
        debug_assert_eq!(text.len(), offsets.len());
        Self {
            text,
            offsets,
            config,
        }
    }

    /// Number of suffixes, which is the length of the text
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The indexed text (lowercased if built case-insensitive)
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// All suffix offsets in sorted order
    #[inline]
    pub fn offsets(&self) -> &[TextPosition] {
        &self.offsets
    }

    pub fn config(&self) -> &SuffixArrayConfig {
        &self.config
    }

    /// Text offset of the suffix with the given rank
    pub fn offset_of(&self, rank: usize) -> Result<TextPosition> {
        self.offsets
            .get(rank)
            .copied()
            .ok_or(Error::RankOutOfRange {
                rank,
                len: self.len(),
            })
    }

    /// The suffix with the given rank, borrowed from the text
    pub fn suffix_at(&self, rank: usize) -> Result<&[u8]> {
        let offset = self.offset_of(rank)?;
        Ok(&self.text[offset..])
    }

    /// The suffix with the given rank as a string
    ///
    /// Intended for diagnostics; invalid UTF-8 is replaced.
    pub fn suffix_string(&self, rank: usize) -> Result<String> {
        Ok(String::from_utf8_lossy(self.suffix_at(rank)?).into_owned())
    }

    /// Length of the longest common prefix of the suffixes at `rank` and
    /// `rank - 1`
    ///
    /// Takes time proportional to the length of the match.
    pub fn lcp(&self, rank: usize) -> Result<usize> {
        if rank == 0 || rank >= self.len() {
            return Err(Error::LcpOutOfRange {
                rank,
                len: self.len(),
            });
        }

        Ok(self.adjacent_lcp(rank))
    }

    /// `lcp` for a rank the caller knows is in `1..len()`
    #[inline]
    pub(crate) fn adjacent_lcp(&self, rank: usize) -> usize {
        common_prefix_len(self.suffix_unchecked(rank), self.suffix_unchecked(rank - 1))
    }

    /// Number of suffixes strictly less than `key`
    ///
    /// This is the leftmost position `key` could be inserted at while keeping
    /// the order: `0` if it is smaller than every suffix, `len()` if larger.
    ///
    /// Every suffix between the current bounds shares with `key` at least
    /// the smaller of the bounds' common prefix lengths, so each probe starts
    /// comparing after those bytes.
    pub fn rank(&self, key: &[u8]) -> usize {
        let key = self.fold_key(key);

        // Answer lies in lo..=hi; suffix[lo - 1] < key <= suffix[hi]
        let mut lo = 0;
        let mut hi = self.len();
        let mut lcp_lo = 0;
        let mut lcp_hi = 0;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let skip = lcp_lo.min(lcp_hi);
            let (ordering, matched) = compare_with_key(self.suffix_unchecked(mid), &key, skip);

            if ordering == Ordering::Less {
                lo = mid + 1;
                lcp_lo = matched;
            } else {
                hi = mid;
                lcp_hi = matched;
            }
        }

        lo
    }

    /// Ranks of all suffixes that start with `prefix`
    ///
    /// The empty prefix matches every suffix.
    pub fn prefix_range(&self, prefix: &[u8]) -> Range<usize> {
        let lo = self.rank(prefix);
        let prefix = self.fold_key(prefix);
        let hi = lo
            + self.offsets[lo..]
                .partition_point(|&offset| self.text[offset..].starts_with(&prefix));
        lo..hi
    }

    /// Number of occurrences of `pattern` in the text
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.prefix_range(pattern).len()
    }

    /// Check if `pattern` occurs in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        !self.prefix_range(pattern).is_empty()
    }

    /// Text offsets of every occurrence of `pattern`, in suffix order
    pub fn occurrences(&self, pattern: &[u8]) -> impl Iterator<Item = TextPosition> + '_ {
        self.offsets[self.prefix_range(pattern)].iter().copied()
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        let max_lcp = (1..self.len())
            .map(|rank| self.adjacent_lcp(rank))
            .max()
            .unwrap_or(0);

        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.len(),
            max_lcp,
            insertion_cutoff: self.config.insertion_cutoff,
            case_insensitive: self.config.case_insensitive,
        }
    }

    /// Suffix at a rank already known to be in range
    #[inline]
    fn suffix_unchecked(&self, rank: usize) -> &[u8] {
        &self.text[self.offsets[rank]..]
    }

    /// Apply the case folding the text was built with
    fn fold_key<'k>(&self, key: &'k [u8]) -> Cow<'k, [u8]> {
        if self.config.case_insensitive {
            Cow::Owned(key.to_ascii_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}
