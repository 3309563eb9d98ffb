//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use banlemma_core::Category;
use std::fs;
use std::path::PathBuf;

/// Source name reported for in-memory input
pub const INLINE_SOURCE: &str = "-";

/// Pre-tagged text to lemmatize
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Tagged text already in memory
    Text(String),
    /// A UTF-8 file of tagged text
    File(PathBuf),
}

impl Input {
    /// Tagged text held in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Tagged text stored in a file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Name of the input in reports: the file path, or `-` for in-memory text
    pub fn source(&self) -> String {
        match self {
            Input::Text(_) => INLINE_SOURCE.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// The tagged text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
        }
    }
}

/// One lemmatized token
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LemmaToken {
    /// The word as the tagger returned it
    pub word: String,
    /// The tagger's tag
    pub tag: String,
    /// The pipeline the tag routed to
    pub category: Category,
    /// The citation form
    pub lemma: String,
}

impl LemmaToken {
    /// The lemma, followed by `/LABEL` when `with_pos` is set
    pub fn render(&self, with_pos: bool) -> String {
        if with_pos {
            format!("{}/{}", self.lemma, self.category.tag_label())
        } else {
            self.lemma.clone()
        }
    }
}

/// Join rendered tokens with single spaces
pub fn render_tokens(tokens: &[LemmaToken], with_pos: bool) -> String {
    tokens
        .iter()
        .map(|token| token.render(with_pos))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Processing metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of tagged tokens
    pub token_count: usize,
    /// Tokens passed through without a pipeline
    pub unclassified_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with tokens and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Rendered output text
    pub text: String,
    /// Per-token results
    pub tokens: Vec<LemmaToken>,
    /// Processing metadata
    pub metadata: Metadata,
}
