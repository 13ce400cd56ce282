//! Error types for burrow operations.
//!
//! The transforms are deterministic pure functions, so every error here is an
//! immediate, local failure raised at the point of detection. Nothing is
//! retried and no partial output is produced.

use std::io;
use thiserror::Error;

/// The main error type for burrow operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A row or rank index outside the valid [0, len) domain.
    #[error("Index out of range: {index} not in [0, {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Size of the valid domain.
        len: usize,
    },

    /// Persisted stream too short to contain a complete value.
    #[error("Truncated stream: need {needed} bytes, have {available}")]
    TruncatedStream {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
}

/// Result type alias for burrow operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a truncated stream error.
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedStream { needed, available }
    }
}
