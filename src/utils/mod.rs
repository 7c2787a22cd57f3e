//! Utility functions used by the `sax` binary.
//!
//! ## Modules
//!
//! - [`text`] - Reading files into a text buffer (raw, joined lines, words)
//! - [`progress`] - Spinner shown while an index builds
//!
//! The library's index and search modules never touch the filesystem; these
//! helpers sit between them and the command line.

pub mod progress;
pub mod text;

pub use progress::BuildSpinner;
pub use text::{lines, load_text, normalize, TextMode};
