//! Error types shared by the selection algorithms and the benchmark harness.

use thiserror::Error;

/// Result type for selection and benchmarking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a caller violates an operation's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested rank does not address an element of the collection.
    /// An empty collection has no valid rank at all.
    #[error("rank {k} is out of range for a collection of length {len}")]
    RankOutOfRange { k: usize, len: usize },

    /// A benchmark parameter (shape name, size, trial count, percentile) is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
