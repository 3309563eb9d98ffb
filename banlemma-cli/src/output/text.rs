//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use banlemma_api::Output;
use std::io::Write;

/// Plain text formatter - outputs one lemmatized document per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
