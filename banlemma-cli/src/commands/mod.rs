//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod lemmatize;
pub mod list;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lemmatize pre-tagged text
    Lemmatize(lemmatize::LemmatizeArgs),

    /// Lemmatize a single word of a known part of speech
    Word(word::WordArgs),

    /// Check a data bundle directory
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the part-of-speech names accepted by `word --pos`
    Categories,

    /// List how tagger tags are routed to categories
    Tags,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Lemmatize(args) => args.execute(),
            Commands::Word(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
