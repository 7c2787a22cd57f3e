//! Keyword-in-context search
//!
//! Finds every occurrence of a keyword through the suffix array's prefix
//! range and reports it with a window of surrounding text.

use crate::index::SuffixArray;
use std::ops::Range;

/// One occurrence of the keyword with its surrounding window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KwicHit {
    /// Offset of the keyword in the text
    pub position: usize,
    /// Window of text around the keyword (byte range, end exclusive)
    pub window: Range<usize>,
    /// Keyword length in bytes
    pub len: usize,
}

impl KwicHit {
    /// The keyword's range relative to the start of the window
    pub fn match_in_window(&self) -> Range<usize> {
        let start = self.position - self.window.start;
        start..start + self.len
    }

    /// Slice the window out of `text`
    ///
    /// `text` is normally the original text the index was built from, which
    /// keeps the original case when the index folds it.
    pub fn context<'t>(&self, text: &'t [u8]) -> &'t [u8] {
        &text[self.window.clone()]
    }
}

/// All occurrences of `query` in text order, each with up to `context`
/// bytes of text on either side
///
/// An empty query has no occurrences.
pub fn kwic(index: &SuffixArray, query: &[u8], context: usize) -> Vec<KwicHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let n = index.len();
    let mut positions: Vec<usize> = index.occurrences(query).collect();
    positions.sort_unstable();

    positions
        .into_iter()
        .map(|position| KwicHit {
            position,
            window: position.saturating_sub(context)..(position + query.len() + context).min(n),
            len: query.len(),
        })
        .collect()
}
