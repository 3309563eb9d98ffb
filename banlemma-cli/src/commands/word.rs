//! Word command implementation

use super::init_logging;
use anyhow::{Context, Result};
use banlemma_api::{Config, Lemmatizer};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// The word to lemmatize
    pub word: String,

    /// Part of speech (see `banlemma list categories`)
    #[arg(short, long)]
    pub pos: String,

    /// Data bundle directory (default: embedded bundle)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let mut builder = Config::builder();
        if let Some(dir) = &self.data_dir {
            builder = builder.data_dir(dir);
        }
        let lemmatizer = Lemmatizer::with_config(builder.build()?)
            .context("Failed to load lemmatizer data")?;

        let lemma = lemmatizer.lemmatize_word(&self.word, &self.pos)?;
        println!("{lemma}");
        Ok(())
    }
}
