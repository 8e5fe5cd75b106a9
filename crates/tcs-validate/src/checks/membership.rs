//! Schema membership checks.
//!
//! Selections are checked against the option set for the file that is
//! loaded *now*. A column chosen from an earlier upload that the current file
//! lacks is reported here, never dropped.

use tcs_model::{ChartDraft, Field, OptionSet};

use crate::issue::Issue;

/// Report every distinct selected value missing from `options`.
pub fn check(draft: &ChartDraft, options: &OptionSet) -> Vec<Issue> {
    let mut issues = Vec::new();
    for field in Field::SELECTIONS {
        let mut reported: Vec<&str> = Vec::new();
        for value in draft.selection(field) {
            if !options.contains(value) && !reported.contains(&value.as_str()) {
                reported.push(value);
                issues.push(Issue::NotInSchema {
                    field,
                    value: value.clone(),
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcs_model::{ColumnSet, options_for};

    #[test]
    fn test_unknown_columns_reported() {
        let (columns, _) = ColumnSet::from_header(["id", "value"]);
        let draft = ChartDraft {
            columns: vec!["id".into(), "name".into()],
            y_axes: vec!["age".into()],
            ..ChartDraft::default()
        };
        let issues = check(&draft, &options_for(&columns));
        assert_eq!(
            issues,
            vec![
                Issue::NotInSchema {
                    field: Field::Columns,
                    value: "name".to_string()
                },
                Issue::NotInSchema {
                    field: Field::YAxes,
                    value: "age".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_options_reject_everything() {
        let draft = ChartDraft {
            x_axes: vec!["x".into()],
            ..ChartDraft::default()
        };
        assert_eq!(check(&draft, &OptionSet::default()).len(), 1);
    }
}
