//! Byte comparison primitives over the shared text buffer
//!
//! Suffixes are never copied: every comparison reads through to the text
//! using start offsets, so sorting only ever moves integers around.

use super::types::END_OF_TEXT;
use std::cmp::Ordering;

/// Sort key of the byte at `pos`, or [`END_OF_TEXT`] past the end
#[inline]
pub(crate) fn key_at(text: &[u8], pos: usize) -> i16 {
    text.get(pos).map_or(END_OF_TEXT, |&b| i16::from(b))
}

/// Compare the suffixes starting at `a` and `b`, skipping the first `depth`
/// bytes which the caller already knows to be equal.
///
/// A suffix that runs out first is the smaller one.
#[inline]
pub(crate) fn compare_suffixes(text: &[u8], a: usize, b: usize, depth: usize) -> Ordering {
    let a = (a + depth).min(text.len());
    let b = (b + depth).min(text.len());
    text[a..].cmp(&text[b..])
}

/// Length of the longest common prefix of two byte strings
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Compare `suffix` against a query `key`, starting at byte `skip`.
///
/// The first `skip` bytes must already be known to match. Returns how the
/// suffix orders relative to the key, together with the length of their
/// common prefix.
#[inline]
pub(crate) fn compare_with_key(suffix: &[u8], key: &[u8], skip: usize) -> (Ordering, usize) {
    debug_assert!(skip <= suffix.len() && skip <= key.len());

    let matched = skip + common_prefix_len(&suffix[skip..], &key[skip..]);
    let ordering = match (suffix.get(matched), key.get(matched)) {
        (Some(s), Some(k)) => s.cmp(k),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    (ordering, matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_at_past_end() {
        let text = b"ab";
        assert_eq!(key_at(text, 0), i16::from(b'a'));
        assert_eq!(key_at(text, 1), i16::from(b'b'));
        assert_eq!(key_at(text, 2), END_OF_TEXT);
        assert!(key_at(text, 2) < key_at(b"\x00", 0));
    }

    #[test]
    fn test_shorter_suffix_sorts_first() {
        // "a" (offset 5) is a prefix of "ana" (offset 3)
        let text = b"banana";
        assert_eq!(compare_suffixes(text, 5, 3, 0), Ordering::Less);
        assert_eq!(compare_suffixes(text, 3, 5, 0), Ordering::Greater);
        assert_eq!(compare_suffixes(text, 3, 3, 0), Ordering::Equal);
    }

    #[test]
    fn test_compare_from_depth() {
        // "ana" vs "anana" after skipping "an": "a" vs "ana"
        let text = b"banana";
        assert_eq!(compare_suffixes(text, 3, 1, 2), Ordering::Less);
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(b"abracadabra", b"abra"), 4);
        assert_eq!(common_prefix_len(b"abc", b"xyz"), 0);
        assert_eq!(common_prefix_len(b"", b"abc"), 0);
    }

    #[test]
    fn test_compare_with_key() {
        assert_eq!(compare_with_key(b"ABRA!", b"ABRA", 0), (Ordering::Greater, 4));
        assert_eq!(compare_with_key(b"A!", b"ABRA", 0), (Ordering::Less, 1));
        assert_eq!(compare_with_key(b"ABRA", b"ABRA", 2), (Ordering::Equal, 4));
        assert_eq!(compare_with_key(b"AB", b"ABRA", 1), (Ordering::Less, 2));
    }
}
