//! Per-entry name length checks.

use tcs_model::ChartDraft;

use crate::issue::Issue;
use crate::rules::ValidationRules;

/// Check each selected name against the field's entry length bounds.
///
/// Length is counted in characters.
pub fn check(draft: &ChartDraft, rules: &ValidationRules) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (field, limits) in rules.selection_limits() {
        for value in draft.selection(field) {
            let len = value.chars().count();
            if len < limits.entry_min_len {
                issues.push(Issue::EntryTooShort {
                    field,
                    value: value.clone(),
                    min: limits.entry_min_len,
                });
            } else if len > limits.entry_max_len {
                issues.push(Issue::EntryTooLong {
                    field,
                    value: value.clone(),
                    max: limits.entry_max_len,
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcs_model::Field;

    #[test]
    fn test_entry_bounds() {
        let draft = ChartDraft {
            columns: vec!["a".into(), "temperature_c".into(), "ok".into()],
            x_axes: vec!["t".into()],
            ..ChartDraft::default()
        };
        let issues = check(&draft, &ValidationRules::default());
        assert_eq!(
            issues,
            vec![
                Issue::EntryTooShort {
                    field: Field::Columns,
                    value: "a".to_string(),
                    min: 2
                },
                Issue::EntryTooLong {
                    field: Field::Columns,
                    value: "temperature_c".to_string(),
                    max: 10
                },
            ]
        );
    }
}
