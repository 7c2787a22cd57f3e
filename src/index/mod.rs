pub mod suffix_array;
pub mod trie;

pub use suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayStats};
pub use trie::TrieMap;
