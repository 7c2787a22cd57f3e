//! Loading input files into a single text buffer

use anyhow::{Context, Result};
use memchr::memchr_iter;
use std::path::Path;

/// How a file's lines are combined into the indexed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Bytes exactly as stored
    #[default]
    Raw,
    /// Lines concatenated with their line endings removed
    Joined,
    /// Whitespace-separated words, each preceded by a single space
    Words,
}

/// Read `path` and normalize it according to `mode`
pub fn load_text(path: &Path, mode: TextMode) -> Result<Vec<u8>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(normalize(&data, mode))
}

/// Apply `mode` to raw file contents
pub fn normalize(data: &[u8], mode: TextMode) -> Vec<u8> {
    match mode {
        TextMode::Raw => data.to_vec(),
        TextMode::Joined => {
            let mut text = Vec::with_capacity(data.len());
            for line in lines(data) {
                text.extend_from_slice(line);
            }
            text
        }
        TextMode::Words => {
            let mut text = Vec::with_capacity(data.len() + 1);
            for word in data
                .split(|b| b.is_ascii_whitespace())
                .filter(|w| !w.is_empty())
            {
                text.push(b' ');
                text.extend_from_slice(word);
            }
            text
        }
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line
pub fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    let mut start = 0;

    memchr_iter(b'\n', body)
        .chain(std::iter::once(body.len()))
        .take(if data.is_empty() { 0 } else { usize::MAX })
        .map(move |end| {
            let line = &body[start..end];
            start = end + 1;
            line.strip_suffix(b"\r").unwrap_or(line)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let collected: Vec<&[u8]> = lines(b"one\r\ntwo\n\nthree").collect();
        assert_eq!(collected, vec![&b"one"[..], &b"two"[..], &b""[..], &b"three"[..]]);

        let collected: Vec<&[u8]> = lines(b"one\n").collect();
        assert_eq!(collected, vec![&b"one"[..]]);

        assert_eq!(lines(b"").count(), 0);
    }

    #[test]
    fn test_joined() {
        assert_eq!(
            normalize(b"it was\nthe best\r\nof times\n", TextMode::Joined),
            b"it wasthe bestof times"
        );
    }

    #[test]
    fn test_words() {
        assert_eq!(
            normalize(b"it  was\n\tthe best\n", TextMode::Words),
            b" it was the best"
        );
        assert!(normalize(b" \n ", TextMode::Words).is_empty());
    }

    #[test]
    fn test_raw() {
        assert_eq!(normalize(b"a\r\nb", TextMode::Raw), b"a\r\nb");
    }

    #[test]
    fn test_load_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tale.txt");
        std::fs::write(&path, "it was the best of times\nit was the worst of times\n").unwrap();

        let text = load_text(&path, TextMode::Words).unwrap();
        assert!(text.starts_with(b" it was the best"));
        assert!(load_text(&dir.path().join("missing.txt"), TextMode::Raw).is_err());
    }
}
