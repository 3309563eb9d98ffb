//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use banlemma_api::{LemmaToken, Metadata, Output};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per input document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// File name, or `-` for inline text
    pub source: String,
    /// Rendered lemmatized text
    pub text: String,
    /// Per-token results
    pub tokens: Vec<LemmaToken>,
    /// Token counts and timing
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            text: output.text.clone(),
            tokens: output.tokens.clone(),
            metadata: output.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
