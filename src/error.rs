//! Error types for suffix array queries.

use thiserror::Error;

/// Error variants for suffix array and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rank outside `[0, len)` was passed to a positional query.
    #[error("rank {rank} out of range for suffix array of length {len}")]
    RankOutOfRange { rank: usize, len: usize },

    /// An LCP query needs a predecessor, so the rank must lie in `[1, len)`.
    #[error("lcp rank {rank} out of range [1, {len})")]
    LcpOutOfRange { rank: usize, len: usize },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for suffix array operations.
pub type Result<T> = std::result::Result<T, Error>;
