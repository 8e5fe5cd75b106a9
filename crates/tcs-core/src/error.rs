//! Error types for the session layer.

use std::path::PathBuf;
use tcs_validate::RulesError;
use thiserror::Error;

/// Errors loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the settings file.
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for this schema.
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to serialize settings.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failed to write the settings file.
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Validation bounds cannot be satisfied.
    #[error("invalid validation rules: {0}")]
    Rules(#[from] RulesError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
