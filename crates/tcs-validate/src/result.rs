//! Validation outcome types.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use tcs_model::{ChartConfiguration, Field};

use crate::issue::Issue;

/// Issues grouped by field, each list in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    by_field: BTreeMap<Field, Vec<Issue>>,
}

impl FieldErrors {
    /// Group issues by field, keeping their relative order.
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let mut by_field: BTreeMap<Field, Vec<Issue>> = BTreeMap::new();
        for issue in issues {
            by_field.entry(issue.field()).or_default().push(issue);
        }
        Self { by_field }
    }

    /// Issues for one field (empty if the field is fine).
    pub fn get(&self, field: Field) -> &[Issue] {
        self.by_field.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Messages for one field.
    pub fn messages(&self, field: Field) -> Vec<String> {
        self.get(field).iter().map(Issue::message).collect()
    }

    /// First message for one field, as a form would show it.
    pub fn first_message(&self, field: Field) -> Option<String> {
        self.get(field).first().map(Issue::message)
    }

    /// Fields with at least one issue, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }

    /// Returns true if `field` has issues.
    pub fn has(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    /// Total number of issues.
    pub fn issue_count(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Iterate over `(field, issues)` in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Issue])> {
        self.by_field
            .iter()
            .map(|(field, issues)| (*field, issues.as_slice()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.by_field.len()))?;
        for (field, issues) in &self.by_field {
            let messages: Vec<String> = issues.iter().map(Issue::message).collect();
            map.serialize_entry(field.as_str(), &messages)?;
        }
        map.end()
    }
}

/// Outcome of validating a whole draft. Never partially valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ChartConfiguration),
    Invalid(FieldErrors),
}

impl ValidationResult {
    /// Returns true for `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The configuration, if valid.
    pub fn configuration(&self) -> Option<&ChartConfiguration> {
        match self {
            Self::Valid(configuration) => Some(configuration),
            Self::Invalid(_) => None,
        }
    }

    /// The errors, if invalid.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Issues for one field (empty when valid).
    pub fn field_issues(&self, field: Field) -> &[Issue] {
        self.errors().map(|errors| errors.get(field)).unwrap_or(&[])
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<ChartConfiguration, FieldErrors> {
        match self {
            Self::Valid(configuration) => Ok(configuration),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_issues_groups_in_order() {
        let errors = FieldErrors::from_issues([
            Issue::TooFew {
                field: Field::YAxes,
                min: 1,
                found: 0,
            },
            Issue::ChartTypeMissing,
            Issue::NotInSchema {
                field: Field::YAxes,
                value: "gone".to_string(),
            },
        ]);

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::ChartType, Field::YAxes]
        );
        assert_eq!(
            errors.messages(Field::YAxes),
            vec!["at least 1 required", "selection no longer valid: 'gone'"]
        );
        assert_eq!(errors.issue_count(), 3);
        assert!(errors.get(Field::Columns).is_empty());
        assert!(!errors.has(Field::Columns));
    }

    #[test]
    fn test_result_accessors() {
        let result = ValidationResult::Invalid(FieldErrors::from_issues([
            Issue::ChartTypeMissing,
        ]));
        assert!(!result.is_valid());
        assert!(result.configuration().is_none());
        assert_eq!(result.field_issues(Field::ChartType).len(), 1);
        assert!(result.into_result().is_err());
    }
}
