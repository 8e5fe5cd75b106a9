//! Axis/column consistency checks.

use tcs_model::{ChartDraft, Field};

use crate::issue::Issue;

/// Report axes that are not among the selected columns.
pub fn check(draft: &ChartDraft) -> Vec<Issue> {
    let mut issues = Vec::new();
    for field in [Field::XAxes, Field::YAxes] {
        for value in draft.selection(field) {
            if !draft.columns.contains(value) {
                issues.push(Issue::AxisNotInColumns {
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

    #[test]
    fn test_axes_must_be_selected_columns() {
        let draft = ChartDraft {
            columns: vec!["name".into(), "age".into()],
            x_axes: vec!["name".into()],
            y_axes: vec!["city".into()],
            ..ChartDraft::default()
        };
        assert_eq!(
            check(&draft),
            vec![Issue::AxisNotInColumns {
                field: Field::YAxes,
                value: "city".to_string()
            }]
        );
    }
}
