//! Validation change notifications.

use tcs_model::Field;
use tcs_validate::FieldErrors;

/// What triggered a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// A new file was applied and the draft reset.
    Upload,
    /// The user edited one field.
    Edit(Field),
    /// A submit attempt.
    Submit,
    /// The draft was cleared explicitly.
    Reset,
}

/// Delivered to subscribers after a recompute that changed what they see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationChange {
    pub cause: ChangeCause,
    /// Fields whose visible issues differ from the previous notification.
    pub changed: Vec<Field>,
    /// Whether the draft is currently valid (independent of visibility).
    pub valid: bool,
    /// Errors as a form should display them now.
    pub visible: FieldErrors,
}

/// Identifies a listener registered with [`ChartSession::subscribe`].
///
/// [`ChartSession::subscribe`]: crate::ChartSession::subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Fields whose issues differ between two error maps, in form order.
pub fn changed_fields(previous: &FieldErrors, current: &FieldErrors) -> Vec<Field> {
    [Field::ChartType, Field::Columns, Field::XAxes, Field::YAxes]
        .into_iter()
        .filter(|field| previous.get(*field) != current.get(*field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcs_validate::Issue;

    #[test]
    fn test_changed_fields() {
        let previous = FieldErrors::from_issues([
            Issue::ChartTypeMissing,
            Issue::TooFew {
                field: Field::Columns,
                min: 2,
                found: 0,
            },
        ]);
        let current = FieldErrors::from_issues([
            Issue::ChartTypeMissing,
            Issue::TooFew {
                field: Field::XAxes,
                min: 1,
                found: 0,
            },
        ]);

        assert_eq!(
            changed_fields(&previous, &current),
            vec![Field::Columns, Field::XAxes]
        );
        assert!(changed_fields(&current, &current).is_empty());
    }
}
