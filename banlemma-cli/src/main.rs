//! banlemma command-line entry point

use banlemma_cli::commands::Commands;
use clap::Parser;

/// Bangla lemmatizer
#[derive(Debug, Parser)]
#[command(name = "banlemma", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
