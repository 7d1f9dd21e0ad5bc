//! CLI error types.

use std::path::PathBuf;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by `euromc` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a run.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Environment override could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },

    /// Pricing failed or the configuration was rejected by the core.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// JSON output could not be produced.
    #[error("Failed to serialise output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
