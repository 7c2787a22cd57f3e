//! Output formatting for search results

use crate::index::SuffixArray;
use crate::search::KwicHit;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Replace line breaks and tabs so each hit prints on one line
fn flatten(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Print keyword-in-context hits, one per line, keyword highlighted
///
/// `text` is the original text, so the context keeps its case even when the
/// index was built case-insensitive.
pub fn print_kwic_hits(hits: &[KwicHit], text: &[u8], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    for hit in hits {
        let context = hit.context(text);
        let keyword = hit.match_in_window();

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>8}", hit.position)?;
        stdout.reset()?;
        write!(stdout, ": {}", flatten(&context[..keyword.start]))?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", flatten(&context[keyword.clone()]))?;
        stdout.reset()?;

        writeln!(stdout, "{}", flatten(&context[keyword.end..]))?;
    }

    Ok(())
}

/// Print the words missing from a dictionary
pub fn print_misspelled(words: &[&str], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    if words.is_empty() {
        writeln!(stdout, "There are no misspelled words!")?;
        return Ok(());
    }

    writeln!(stdout, "Misspelled words are:")?;
    for word in words {
        write!(stdout, "* ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stdout, "{}", word)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print every suffix as `rank, offset, lcp, rank(suffix), suffix`
///
/// Suffixes are cut to `width` bytes. The rank column re-queries each full
/// suffix, so it doubles as a consistency check of `rank`.
pub fn print_suffix_table(index: &SuffixArray, width: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "rank\toffset\tlcp\trank(s)\tsuffix")?;
    for rank in 0..index.len() {
        let (Ok(offset), Ok(suffix)) = (index.offset_of(rank), index.suffix_at(rank)) else {
            break;
        };
        let lcp = index
            .lcp(rank)
            .map_or_else(|_| "-".to_string(), |lcp| lcp.to_string());
        let shown = &suffix[..suffix.len().min(width)];

        writeln!(
            out,
            "{}\t{}\t{}\t{}\t\"{}\"",
            rank,
            offset,
            lcp,
            index.rank(suffix),
            flatten(shown)
        )?;
    }

    Ok(())
}
