//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Issues are values the form renders inline;
//! they are never raised as errors.

use tcs_model::Field;

use crate::rules::Rule;

/// A single rule violation on one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Cardinality checks
    /// Fewer selections than the field's minimum
    TooFew {
        field: Field,
        min: usize,
        found: usize,
    },
    /// More selections than the field's maximum
    TooMany {
        field: Field,
        max: usize,
        found: usize,
    },

    // Uniqueness checks
    /// The same column was selected twice in one field
    Duplicate { field: Field, value: String },

    // Membership checks
    /// Selection is not a column of the current file (includes stale selections)
    NotInSchema { field: Field, value: String },

    // Entry length checks
    /// Selected name is shorter than allowed
    EntryTooShort {
        field: Field,
        value: String,
        min: usize,
    },
    /// Selected name is longer than allowed
    EntryTooLong {
        field: Field,
        value: String,
        max: usize,
    },

    // Consistency checks
    /// Axis is not one of the selected columns
    AxisNotInColumns { field: Field, value: String },

    // Presence checks
    /// No chart type chosen
    ChartTypeMissing,
    /// Chart type value is not one of the supported kinds
    ChartTypeUnknown { value: String },
}

impl Issue {
    /// Field the issue belongs to.
    pub fn field(&self) -> Field {
        match self {
            Issue::TooFew { field, .. }
            | Issue::TooMany { field, .. }
            | Issue::Duplicate { field, .. }
            | Issue::NotInSchema { field, .. }
            | Issue::EntryTooShort { field, .. }
            | Issue::EntryTooLong { field, .. }
            | Issue::AxisNotInColumns { field, .. } => *field,
            Issue::ChartTypeMissing | Issue::ChartTypeUnknown { .. } => Field::ChartType,
        }
    }

    /// Rule that produced this issue.
    pub fn rule(&self) -> Rule {
        match self {
            Issue::TooFew { .. } | Issue::TooMany { .. } => Rule::Cardinality,
            Issue::Duplicate { .. } => Rule::Uniqueness,
            Issue::NotInSchema { .. } => Rule::Membership,
            Issue::EntryTooShort { .. } | Issue::EntryTooLong { .. } => Rule::EntryLength,
            Issue::AxisNotInColumns { .. } => Rule::AxesWithinColumns,
            Issue::ChartTypeMissing | Issue::ChartTypeUnknown { .. } => Rule::ChartTypePresence,
        }
    }

    /// Offending value, for issues about a specific selection.
    pub fn value(&self) -> Option<&str> {
        match self {
            Issue::Duplicate { value, .. }
            | Issue::NotInSchema { value, .. }
            | Issue::EntryTooShort { value, .. }
            | Issue::EntryTooLong { value, .. }
            | Issue::AxisNotInColumns { value, .. }
            | Issue::ChartTypeUnknown { value } => Some(value),
            Issue::TooFew { .. } | Issue::TooMany { .. } | Issue::ChartTypeMissing => None,
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Issue::TooFew { min, .. } => format!("at least {min} required"),
            Issue::TooMany { max, .. } => format!("at most {max} allowed"),
            Issue::Duplicate { value, .. } => format!("'{value}' selected more than once"),
            Issue::NotInSchema { value, .. } => format!("selection no longer valid: '{value}'"),
            Issue::EntryTooShort { value, min, .. } => {
                format!("'{value}' must be at least {min} characters")
            }
            Issue::EntryTooLong { value, max, .. } => {
                format!("'{value}' must be at most {max} characters")
            }
            Issue::AxisNotInColumns { value, .. } => {
                format!("'{value}' is not among the selected columns")
            }
            Issue::ChartTypeMissing => "please select a chart type".to_string(),
            Issue::ChartTypeUnknown { value } => format!("unknown chart type '{value}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_messages() {
        let issue = Issue::TooFew {
            field: Field::Columns,
            min: 2,
            found: 1,
        };
        assert_eq!(issue.message(), "at least 2 required");
        assert_eq!(issue.field(), Field::Columns);
        assert_eq!(issue.rule(), Rule::Cardinality);
        assert_eq!(issue.value(), None);

        let issue = Issue::TooMany {
            field: Field::YAxes,
            max: 10,
            found: 11,
        };
        assert_eq!(issue.message(), "at most 10 allowed");
    }

    #[test]
    fn test_chart_type_issues_belong_to_chart_type() {
        assert_eq!(Issue::ChartTypeMissing.field(), Field::ChartType);
        let unknown = Issue::ChartTypeUnknown {
            value: "scatter".to_string(),
        };
        assert_eq!(unknown.field(), Field::ChartType);
        assert_eq!(unknown.message(), "unknown chart type 'scatter'");
        assert_eq!(unknown.value(), Some("scatter"));
    }

    #[test]
    fn test_stale_selection_message() {
        let issue = Issue::NotInSchema {
            field: Field::XAxes,
            value: "name".to_string(),
        };
        assert_eq!(issue.message(), "selection no longer valid: 'name'");
        assert_eq!(issue.rule(), Rule::Membership);
    }
}
