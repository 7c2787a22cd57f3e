//! Longest repeated and longest common substrings
//!
//! Both reduce to scanning LCPs of adjacent suffixes. The per-rank LCP
//! queries are independent reads of a frozen index, so they run on rayon's
//! thread pool.

use crate::index::{SuffixArray, SuffixArrayBuilder};
use rayon::prelude::*;

/// A substring of an indexed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substring {
    pub offset: usize,
    pub len: usize,
}

impl Substring {
    pub fn bytes<'t>(&self, text: &'t [u8]) -> &'t [u8] {
        &text[self.offset..self.offset + self.len]
    }
}

/// A substring shared by two texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonSubstring {
    /// Offset in the first text
    pub a_offset: usize,
    /// Offset in the second text
    pub b_offset: usize,
    pub len: usize,
}

/// LCP of every adjacent pair; entry `i` belongs to rank `i + 1`
fn adjacent_lcps(index: &SuffixArray) -> Vec<usize> {
    (1..index.len())
        .into_par_iter()
        .map(|rank| index.adjacent_lcp(rank))
        .collect()
}

/// Longest substring occurring at least twice in the indexed text
///
/// Returns `None` when no byte repeats. Among equally long candidates the
/// one at the smallest rank wins.
pub fn longest_repeated_substring(index: &SuffixArray) -> Option<Substring> {
    let (len, rank) = (1..index.len())
        .into_par_iter()
        .map(|rank| (index.adjacent_lcp(rank), std::cmp::Reverse(rank)))
        .max()
        .map(|(len, rank)| (len, rank.0))?;

    if len == 0 {
        return None;
    }

    let offset = index.offset_of(rank).ok()?;
    Some(Substring { offset, len })
}

/// Longest substring of both `a` and `b`
///
/// Builds one index over `a` followed by `b`. A suffix starting in `a` keeps
/// running into `b`, so its usable length is clipped at the end of `a`.
/// Clipped `a`-suffixes can sort between the best pair, so instead of only
/// comparing neighbours the scan carries the best `a`-side candidate across
/// ranks, once in each direction.
///
/// Returns `None` if the texts share no byte.
pub fn longest_common_substring(
    builder: SuffixArrayBuilder,
    a: &[u8],
    b: &[u8],
) -> Option<CommonSubstring> {
    let split = a.len();
    let index = builder.build([a, b].concat());
    let offsets = index.offsets();
    let lcps = adjacent_lcps(&index);
    let n = offsets.len();

    let mut best = None;
    // Forward: the LCP with the previously visited rank is lcps[rank - 1]
    carry_scan(offsets, split, 0..n, |rank| lcps[rank - 1], &mut best);
    // Backward: the LCP with the previously visited rank is lcps[rank]
    carry_scan(offsets, split, (0..n).rev(), |rank| lcps[rank], &mut best);

    best
}

/// One pass of the longest common substring scan
///
/// `lcp_with_previous(rank)` is only called once a candidate is carried,
/// so never for the first rank visited.
fn carry_scan(
    offsets: &[usize],
    split: usize,
    ranks: impl Iterator<Item = usize>,
    lcp_with_previous: impl Fn(usize) -> usize,
    best: &mut Option<CommonSubstring>,
) {
    // (offset in a, usable length)
    let mut carried: Option<(usize, usize)> = None;

    for rank in ranks {
        if let Some((_, len)) = carried.as_mut() {
            *len = (*len).min(lcp_with_previous(rank));
        }

        let offset = offsets[rank];
        if offset < split {
            let usable = split - offset;
            if carried.is_none_or(|(_, len)| usable >= len) {
                carried = Some((offset, usable));
            }
        } else if let Some((a_offset, len)) = carried {
            if len > best.map_or(0, |c| c.len) {
                *best = Some(CommonSubstring {
                    a_offset,
                    b_offset: offset - split,
                    len,
                });
            }
        }
    }
}
