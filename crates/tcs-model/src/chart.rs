//! Chart form types.
//!
//! A [`ChartDraft`] is what the user has entered so far and may be invalid in
//! any way. A [`ChartConfiguration`] is what the validator hands out once a
//! draft passes every rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::options::SelectOption;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
}

impl ChartType {
    /// All chart types in selector order.
    pub const fn all() -> &'static [Self] {
        &[Self::Bar, Self::Line, Self::Pie]
    }

    /// Canonical value as submitted by the form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }

    /// Display label for the chart type selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Pie => "Pie Chart",
        }
    }

    /// Parse a submitted value. Matching is exact, like the form's values.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == s)
    }

    /// Options for the chart type selector.
    pub fn options() -> Vec<SelectOption> {
        Self::all()
            .iter()
            .map(|t| SelectOption::new(t.label(), t.as_str()))
            .collect()
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown chart type '{s}'"))
    }
}

/// The four inputs of the chart form.
///
/// Ordering follows the form layout and is used for error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "chartType")]
    ChartType,
    #[serde(rename = "columns")]
    Columns,
    #[serde(rename = "xAxes")]
    XAxes,
    #[serde(rename = "yAxes")]
    YAxes,
}

impl Field {
    /// The multi-select fields, in evaluation order.
    pub const SELECTIONS: [Self; 3] = [Self::Columns, Self::XAxes, Self::YAxes];

    /// Field name as used by the form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChartType => "chartType",
            Self::Columns => "columns",
            Self::XAxes => "xAxes",
            Self::YAxes => "yAxes",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ChartType => "Chart Type",
            Self::Columns => "Columns",
            Self::XAxes => "X Axes",
            Self::YAxes => "Y Axes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDraft {
    /// Raw chart type value; `None` until the user picks one.
    pub chart_type: Option<String>,
    pub columns: Vec<String>,
    pub x_axes: Vec<String>,
    pub y_axes: Vec<String>,
}

impl ChartDraft {
    /// Current values of a multi-select field.
    ///
    /// Returns an empty slice for [`Field::ChartType`].
    pub fn selection(&self, field: Field) -> &[String] {
        match field {
            Field::ChartType => &[],
            Field::Columns => &self.columns,
            Field::XAxes => &self.x_axes,
            Field::YAxes => &self.y_axes,
        }
    }

    /// Replaces the values of a multi-select field.
    ///
    /// Ignored for [`Field::ChartType`].
    pub fn set_selection(&mut self, field: Field, values: Vec<String>) {
        match field {
            Field::ChartType => {}
            Field::Columns => self.columns = values,
            Field::XAxes => self.x_axes = values,
            Field::YAxes => self.y_axes = values,
        }
    }

    /// Returns true if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.chart_type.is_none()
            && self.columns.is_empty()
            && self.x_axes.is_empty()
            && self.y_axes.is_empty()
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A configuration that passed validation against the current columns.
///
/// Produced by the validator; the renderer may rely on every named column
/// existing in the table it was validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub chart_type: ChartType,
    pub columns: Vec<String>,
    pub x_axes: Vec<String>,
    pub y_axes: Vec<String>,
}
