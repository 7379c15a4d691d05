//! Error types for the splitting engine

use std::io;
use thiserror::Error;

/// Errors produced while configuring or running a split
#[derive(Error, Debug)]
pub enum SplitError {
    /// Suffix width below one character
    #[error("suffix length must be at least 1, got {width}")]
    NegativeDigit {
        /// The configured suffix width
        width: usize,
    },

    /// A chunk index below zero was requested
    #[error("chunk index must not be negative, got {index}")]
    NegativeIndex {
        /// The requested index
        index: i64,
    },

    /// The index cannot be represented in the configured suffix width
    #[error("chunk index {index} does not fit in {width} suffix characters")]
    TooManyChunks {
        /// The requested index
        index: u64,
        /// The configured suffix width
        width: usize,
    },

    /// Malformed chunk descriptor (`-n`)
    #[error("chunk format is invalid: {descriptor:?}")]
    ChunkFormatInvalid {
        /// The descriptor as supplied
        descriptor: String,
    },

    /// Malformed byte-size descriptor (`-b`)
    #[error("separate byte is invalid: {descriptor:?}")]
    SeparateByteInvalid {
        /// The descriptor as supplied
        descriptor: String,
    },

    /// Reading the input failed
    #[error("failed to read from the input file")]
    InputReadFailed(#[source] io::Error),

    /// Creating, writing or re-reading an output chunk failed
    #[error("failed to write to the output file {name}")]
    OutputWriteFailed {
        /// Name of the chunk being written
        name: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Whether this error was caused by bad configuration rather than I/O
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            SplitError::InputReadFailed(_) | SplitError::OutputWriteFailed { .. }
        )
    }

    pub(crate) fn output(name: &str, source: io::Error) -> Self {
        SplitError::OutputWriteFailed {
            name: name.to_string(),
            source,
        }
    }
}

/// Result type for splitting operations
pub type Result<T> = std::result::Result<T, SplitError>;
