//! Configurable bounds for the chart form.

use serde::{Deserialize, Serialize};
use tcs_model::Field;
use thiserror::Error;

/// Selection bounds for one multi-select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimits {
    /// Minimum number of selections.
    pub min: usize,
    /// Maximum number of selections.
    pub max: usize,
    /// Minimum length of each selected name (only with `check_entry_length`).
    #[serde(default)]
    pub entry_min_len: usize,
    /// Maximum length of each selected name (only with `check_entry_length`).
    #[serde(default = "default_entry_max_len")]
    pub entry_max_len: usize,
}

fn default_entry_max_len() -> usize {
    10
}

impl FieldLimits {
    /// Limits with the given count bounds and the given entry-length bounds.
    pub const fn new(min: usize, max: usize, entry_min_len: usize, entry_max_len: usize) -> Self {
        Self {
            min,
            max,
            entry_min_len,
            entry_max_len,
        }
    }
}

/// Rule configuration for the validator.
///
/// Defaults: `columns` 2..=10, `xAxes` and `yAxes` 1..=10, entry-length and
/// axes-within-columns rules off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub columns: FieldLimits,
    pub x_axes: FieldLimits,
    pub y_axes: FieldLimits,
    /// Enforce per-entry name length bounds.
    pub check_entry_length: bool,
    /// Require every axis to also be a selected column.
    pub axes_within_columns: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            columns: FieldLimits::new(2, 10, 2, 10),
            x_axes: FieldLimits::new(1, 10, 1, 10),
            y_axes: FieldLimits::new(1, 10, 1, 10),
            check_entry_length: false,
            axes_within_columns: false,
        }
    }
}

/// Rule configuration that cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{field}: minimum selections {min} exceeds maximum {max}")]
    InvertedCount { field: Field, min: usize, max: usize },
    #[error("{field}: minimum entry length {min} exceeds maximum {max}")]
    InvertedLength { field: Field, min: usize, max: usize },
}

impl ValidationRules {
    /// Limits for a multi-select field; `None` for [`Field::ChartType`].
    pub fn limits(&self, field: Field) -> Option<&FieldLimits> {
        match field {
            Field::ChartType => None,
            Field::Columns => Some(&self.columns),
            Field::XAxes => Some(&self.x_axes),
            Field::YAxes => Some(&self.y_axes),
        }
    }

    /// Every multi-select field with its limits, in form order.
    pub fn selection_limits(&self) -> impl Iterator<Item = (Field, &FieldLimits)> {
        [
            (Field::Columns, &self.columns),
            (Field::XAxes, &self.x_axes),
            (Field::YAxes, &self.y_axes),
        ]
        .into_iter()
    }

    /// Reject bounds where the minimum exceeds the maximum.
    pub fn check(&self) -> Result<(), RulesError> {
        for (field, limits) in self.selection_limits() {
            if limits.min > limits.max {
                return Err(RulesError::InvertedCount {
                    field,
                    min: limits.min,
                    max: limits.max,
                });
            }
            if self.check_entry_length && limits.entry_min_len > limits.entry_max_len {
                return Err(RulesError::InvertedLength {
                    field,
                    min: limits.entry_min_len,
                    max: limits.entry_max_len,
                });
            }
        }
        Ok(())
    }
}
