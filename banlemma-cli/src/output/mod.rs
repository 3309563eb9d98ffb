//! Output formatting module

use anyhow::Result;
use banlemma_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result of one input document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
