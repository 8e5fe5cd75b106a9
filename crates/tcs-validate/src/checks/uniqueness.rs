//! Duplicate selection checks.

use tcs_model::{ChartDraft, Field};

use crate::issue::Issue;

/// Report each value listed more than once within a field (once per value).
pub fn check(draft: &ChartDraft) -> Vec<Issue> {
    let mut issues = Vec::new();
    for field in Field::SELECTIONS {
        let values = draft.selection(field);
        let mut reported: Vec<&str> = Vec::new();
        for (idx, value) in values.iter().enumerate() {
            if values[..idx].contains(value) && !reported.contains(&value.as_str()) {
                reported.push(value);
                issues.push(Issue::Duplicate {
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
    fn test_duplicates_reported_once() {
        let draft = ChartDraft {
            columns: vec!["a".into(), "b".into(), "a".into(), "a".into()],
            x_axes: vec!["a".into()],
            ..ChartDraft::default()
        };
        assert_eq!(
            check(&draft),
            vec![Issue::Duplicate {
                field: Field::Columns,
                value: "a".to_string()
            }]
        );
    }
}
