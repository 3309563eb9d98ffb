//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use banlemma_core::{Category, MarkerClass, Resources};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the data bundle directory to validate
    #[arg(short = 'd', long, value_name = "DIR", required = true)]
    pub data_dir: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating data bundle: {}", self.data_dir.display());

        match banlemma_core::data::from_dir(&self.data_dir) {
            Ok(resources) => {
                println!("✓ Bundle is valid!");
                print_summary(&resources);
                Ok(())
            }
            Err(e) => {
                println!("✗ Bundle is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidBundle(e.to_string()).into())
            }
        }
    }
}

fn print_summary(resources: &Resources) {
    println!("  Lexicons:");
    for category in Category::LEXICAL {
        println!(
            "    {:<14} {} entries",
            category.to_string(),
            resources.lexicon().len(category)
        );
    }

    println!("  Marker tables:");
    for class in MarkerClass::ALL {
        println!(
            "    {:<14} {} suffixes",
            class.key(),
            resources.suffixes(class).len()
        );
    }

    println!("  Verb rules: {} suffixes", resources.verb_rules().len());
}
