//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Data bundle configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Data bundle configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DataConfig {
    /// Directory holding the bundle; the embedded bundle when unset
    pub dir: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Annotate lemmas with category labels
    pub with_pos: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            with_pos: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the file if one is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
