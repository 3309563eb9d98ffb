//! API error types

use banlemma_core::DataError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The part of speech names no known word class
    #[error("invalid part of speech '{pos}'")]
    InvalidCategory {
        /// The rejected name
        pos: String,
    },

    /// The word API was given more than one token
    #[error("expected a single word, got {count} tokens")]
    MultiWordInput {
        /// Number of whitespace-delimited tokens
        count: usize,
    },

    /// The word API was given no token at all
    #[error("empty input")]
    EmptyInput,

    /// The tagger failed on the input text
    #[error("tagger error: {0}")]
    Tagger(String),

    /// The data bundle could not be loaded
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
