//! Selectable options derived from the current columns.
//!
//! Every multi-select in the chart form offers the same options: one per
//! discovered column, in header order. The option set is also the list of
//! legal values the validator checks selections against, so it must always
//! be rebuilt from the latest [`ColumnSet`].

use serde::Serialize;

use crate::column::ColumnSet;

/// A display/value pair shown in a select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered options for the column selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Returns true if `value` is a legal selection.
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options in column order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Iterate over option values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }

    /// Options as a slice.
    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }
}

impl FromIterator<SelectOption> for OptionSet {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

/// Derives one option per column, preserving column order.
pub fn options_for(columns: &ColumnSet) -> OptionSet {
    columns
        .iter()
        .map(|name| SelectOption::new(name, name))
        .collect()
}
