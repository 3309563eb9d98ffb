//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInputFiles,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Data bundle failed validation
    InvalidBundle(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidBundle(msg) => write!(f, "Invalid data bundle: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        assert_eq!(
            CliError::NoInputFiles.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format 'xml'".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown format 'xml'");
    }

    #[test]
    fn test_bundle_error_display() {
        let error = CliError::InvalidBundle("missing verb rules".to_string());
        assert!(error.to_string().starts_with("Invalid data bundle:"));
    }

    #[test]
    fn test_error_downcasts_from_anyhow() {
        let result: CliResult<()> = Err(CliError::NoInputFiles.into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInputFiles)
        ));
    }
}
