//! Validation engine.

use tcs_model::{ChartConfiguration, ChartDraft, ChartType, Field, OptionSet};

use crate::issue::Issue;
use crate::result::{FieldErrors, ValidationResult};
use crate::rules::{Rule, ValidationRules};

/// Collect every issue for a draft, in rule order.
pub fn collect_issues(
    draft: &ChartDraft,
    options: &OptionSet,
    rules: &ValidationRules,
) -> Vec<Issue> {
    Rule::ORDER
        .iter()
        .filter(|rule| rule.is_enabled(rules))
        .flat_map(|rule| rule.evaluate(draft, options, rules))
        .collect()
}

/// Validate a draft against the legal column options.
///
/// `options` must come from the currently loaded file; validity is always
/// relative to it.
pub fn validate(draft: &ChartDraft, options: &OptionSet, rules: &ValidationRules) -> ValidationResult {
    let issues = collect_issues(draft, options, rules);
    let chart_type = draft.chart_type.as_deref().and_then(ChartType::parse);

    match chart_type {
        Some(chart_type) if issues.is_empty() => {
            tracing::trace!(chart_type = %chart_type, "draft is valid");
            ValidationResult::Valid(ChartConfiguration {
                chart_type,
                columns: draft.columns.clone(),
                x_axes: draft.x_axes.clone(),
                y_axes: draft.y_axes.clone(),
            })
        }
        _ => {
            tracing::trace!(issues = issues.len(), "draft is invalid");
            ValidationResult::Invalid(FieldErrors::from_issues(issues))
        }
    }
}

/// Issues for a single field, as produced by a full validation.
pub fn validate_field(
    draft: &ChartDraft,
    options: &OptionSet,
    rules: &ValidationRules,
    field: Field,
) -> Vec<Issue> {
    collect_issues(draft, options, rules)
        .into_iter()
        .filter(|issue| issue.field() == field)
        .collect()
}
