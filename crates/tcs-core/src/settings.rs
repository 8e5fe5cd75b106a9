//! Application settings.
//!
//! Settings are read from a TOML file in the user's config directory (or an
//! explicit path). A missing file means defaults; a malformed one is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tcs_ingest::ParseOptions;
use tcs_validate::ValidationRules;

use crate::error::{Result, SettingsError};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How uploads are parsed.
    pub ingest: ParseOptions,

    /// How the chart form is validated.
    pub validation: ValidationSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validation.rules.check()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "TabularChartStudio", "TCS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// VALIDATION SETTINGS
// =============================================================================

/// When validation errors become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Errors are shown as soon as a field changes.
    #[default]
    OnChange,
    /// Errors stay hidden until the first submit attempt, then track changes.
    OnSubmit,
}

impl ValidationMode {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnChange => "On change",
            Self::OnSubmit => "On submit",
        }
    }
}

/// Validation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// When errors are shown.
    pub mode: ValidationMode,

    /// Bounds and optional rules.
    pub rules: ValidationRules,
}
