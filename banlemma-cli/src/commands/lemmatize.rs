//! Lemmatize command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use banlemma_api::{Config, Input, Lemmatizer, Output};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the lemmatize command
#[derive(Debug, Args)]
pub struct LemmatizeArgs {
    /// Pre-tagged input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Pre-tagged text given inline, e.g. "পৃথিবীর/NC কথা/NC"
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Append the category label to every lemma
    #[arg(long)]
    pub pos: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Data bundle directory (default: embedded bundle)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Lemmatized text, one line per input document
    Text,
    /// JSON array of documents with per-token results
    Json,
}

impl LemmatizeArgs {
    /// Execute the lemmatize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting lemmatization");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&cli_config)?;
        let lemmatizer = self.build_lemmatizer(&cli_config)?;

        let documents = match &self.text {
            Some(text) => {
                let input = Input::from_text(text.as_str());
                vec![(input.source(), lemmatizer.process(input)?)]
            }
            None => self.process_files(&lemmatizer)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
        };

        for (source, output) in &documents {
            formatter.format_document(source, output)?;
        }
        formatter.finish()?;

        log::info!("Lemmatized {} document(s)", documents.len());
        Ok(())
    }

    /// Command line format, then the configured default
    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &cli_config.output.default_format;
        OutputFormat::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }

    fn build_lemmatizer(&self, cli_config: &CliConfig) -> Result<Lemmatizer> {
        let mut builder =
            Config::builder().with_pos(self.pos || cli_config.output.with_pos);

        if let Some(dir) = self.data_dir.as_ref().or(cli_config.data.dir.as_ref()) {
            builder = builder.data_dir(dir);
        }

        let lemmatizer = Lemmatizer::with_config(builder.build()?)
            .context("Failed to load lemmatizer data")?;
        Ok(lemmatizer)
    }

    fn process_files(&self, lemmatizer: &Lemmatizer) -> Result<Vec<(String, Output)>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to lemmatize", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = files
            .par_iter()
            .map(|path| -> Result<(String, Output)> {
                let input = Input::from_file(path);
                let source = input.source();
                let output = lemmatizer
                    .process(input)
                    .with_context(|| format!("Failed to lemmatize: {source}"))?;
                progress.file_completed(&source);
                Ok((source, output))
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        documents
    }
}
