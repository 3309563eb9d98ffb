//! Core error types (data loading only)
//!
//! Lemmatization itself never fails: a word that no rule applies to is
//! returned unchanged. The only failure mode of this crate is a missing or
//! malformed data bundle, which is fatal at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a data bundle
#[derive(Error, Debug)]
pub enum DataError {
    /// A bundle file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A bundle file is not valid JSON for its schema
    #[error("failed to parse {file}: {source}")]
    Json {
        /// Logical name of the bundle file (e.g. `dictionary.json`)
        file: String,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// The dictionary has no lexicon for a category
    #[error("dictionary is missing the '{0}' lexicon")]
    MissingCategory(String),

    /// The marker file has no table for a marker class
    #[error("marker tables are missing the '{0}' class")]
    MissingMarkerClass(String),

    /// The suffix file has no verb rule list
    #[error("suffix rules are missing the 'verbs' list")]
    MissingVerbRules,

    /// A suffix table contains an empty string
    #[error("suffix table '{table}' contains an empty suffix")]
    EmptySuffix {
        /// Name of the offending table
        table: String,
    },
}

/// Result type for data loading
pub type Result<T> = std::result::Result<T, DataError>;
