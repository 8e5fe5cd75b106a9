//! Chart type presence check.

use tcs_model::{ChartDraft, ChartType};

use crate::issue::Issue;

/// Chart type must be set to a supported value. An empty string counts as unset.
pub fn check(draft: &ChartDraft) -> Vec<Issue> {
    match draft.chart_type.as_deref() {
        None | Some("") => vec![Issue::ChartTypeMissing],
        Some(value) if ChartType::parse(value).is_none() => vec![Issue::ChartTypeUnknown {
            value: value.to_string(),
        }],
        Some(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_type(value: Option<&str>) -> ChartDraft {
        ChartDraft {
            chart_type: value.map(str::to_string),
            ..ChartDraft::default()
        }
    }

    #[test]
    fn test_presence() {
        assert_eq!(check(&with_type(None)), vec![Issue::ChartTypeMissing]);
        assert_eq!(check(&with_type(Some(""))), vec![Issue::ChartTypeMissing]);
        assert!(check(&with_type(Some("pie"))).is_empty());
        assert_eq!(
            check(&with_type(Some("scatter"))),
            vec![Issue::ChartTypeUnknown {
                value: "scatter".to_string()
            }]
        );
    }
}
