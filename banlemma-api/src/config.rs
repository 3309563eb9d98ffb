//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::tagger::DEFAULT_SEPARATOR;
use banlemma_core::Resources;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the lexicon and suffix tables come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The sample bundle compiled into the library
    #[default]
    Embedded,
    /// A directory holding `dictionary.json`, `markers.json` and `suffixes.json`
    Directory(PathBuf),
}

impl DataSource {
    /// Load the tables this source points at
    pub fn load(&self) -> Result<Arc<Resources>> {
        let resources = match self {
            DataSource::Embedded => Resources::embedded()?,
            DataSource::Directory(dir) => banlemma_core::data::from_dir(dir)?,
        };
        Ok(resources)
    }
}

/// High-level configuration for lemmatization
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) data: DataSource,
    pub(crate) with_pos: bool,
    pub(crate) tag_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataSource::Embedded,
            with_pos: false,
            tag_separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured data source
    pub fn data(&self) -> &DataSource {
        &self.data
    }

    /// Whether processed output is annotated with category labels
    pub fn with_pos(&self) -> bool {
        self.with_pos
    }

    /// Separator between word and tag for pre-tagged input
    pub fn tag_separator(&self) -> char {
        self.tag_separator
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Load tables from a bundle directory instead of the embedded bundle
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data = DataSource::Directory(dir.into());
        self
    }

    /// Set the data source
    pub fn data(mut self, data: DataSource) -> Self {
        self.config.data = data;
        self
    }

    /// Annotate processed output with category labels
    pub fn with_pos(mut self, with_pos: bool) -> Self {
        self.config.with_pos = with_pos;
        self
    }

    /// Set the word/tag separator for pre-tagged input
    pub fn tag_separator(mut self, separator: char) -> Self {
        self.config.tag_separator = separator;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.tag_separator.is_whitespace() {
            return Err(ApiError::Config(
                "tag separator cannot be whitespace".to_string(),
            ));
        }

        Ok(self.config)
    }
}
