//! Selection count checks.

use tcs_model::ChartDraft;

use crate::issue::Issue;
use crate::rules::ValidationRules;

/// Check every multi-select field against its count bounds.
pub fn check(draft: &ChartDraft, rules: &ValidationRules) -> Vec<Issue> {
    rules
        .selection_limits()
        .filter_map(|(field, limits)| {
            let found = draft.selection(field).len();
            if found < limits.min {
                Some(Issue::TooFew {
                    field,
                    min: limits.min,
                    found,
                })
            } else if found > limits.max {
                Some(Issue::TooMany {
                    field,
                    max: limits.max,
                    found,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcs_model::Field;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let issues = check(&ChartDraft::default(), &ValidationRules::default());
        let fields: Vec<Field> = issues.iter().map(Issue::field).collect();
        assert_eq!(fields, vec![Field::Columns, Field::XAxes, Field::YAxes]);
    }

    #[test]
    fn test_upper_bound() {
        let eleven: Vec<String> = (0..11).map(|i| format!("c{i}")).collect();
        let draft = ChartDraft {
            columns: eleven.clone(),
            x_axes: names(&["c0"]),
            y_axes: eleven,
            ..ChartDraft::default()
        };
        let issues = check(&draft, &ValidationRules::default());
        assert_eq!(
            issues,
            vec![
                Issue::TooMany {
                    field: Field::Columns,
                    max: 10,
                    found: 11
                },
                Issue::TooMany {
                    field: Field::YAxes,
                    max: 10,
                    found: 11
                },
            ]
        );
    }
}
