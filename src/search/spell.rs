//! Dictionary lookups backed by the trie symbol table
//!
//! Spell checking reports words missing from the dictionary; autocomplete
//! lists dictionary words sharing a prefix.

use crate::index::TrieMap;

/// A word list, one entry per word
pub struct Dictionary {
    words: TrieMap<usize>,
}

impl Dictionary {
    /// Build from one word per line
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped. Each
    /// word maps to the line it was read from.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let words = lines
            .into_iter()
            .enumerate()
            .map(|(line, word)| (word.trim(), line))
            .filter(|(word, _)| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word.as_bytes())
    }

    /// Line a word was last defined on
    pub fn line_of(&self, word: &str) -> Option<usize> {
        self.words.get(word.as_bytes()).copied()
    }

    /// Words not present in the dictionary, in input order
    pub fn misspelled<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> Vec<&'w str> {
        words
            .into_iter()
            .map(str::trim)
            .filter(|word| !word.is_empty() && !self.contains(word))
            .collect()
    }

    /// Dictionary words starting with `prefix` in sorted order, at most
    /// `limit` of them when given
    pub fn complete(&self, prefix: &str, limit: Option<usize>) -> Vec<String> {
        self.words
            .first_keys_with_prefix(prefix.as_bytes(), limit.unwrap_or(usize::MAX))
            .into_iter()
            .map(|key| String::from_utf8_lossy(&key).into_owned())
            .collect()
    }
}
