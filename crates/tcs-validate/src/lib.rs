//! Chart configuration validation.
//!
//! Validates a [`ChartDraft`] against the option set of the currently loaded
//! file and either produces a [`ChartConfiguration`] or per-field issues.
//!
//! Rules run in a fixed order (see [`Rule::ORDER`]):
//!
//! 1. **Cardinality** - `columns` 2..=10, `xAxes`/`yAxes` 1..=10 by default
//! 2. **Uniqueness** - no column twice in one field
//! 3. **Membership** - every selection exists in the current options
//! 4. **Entry length** - optional name length bounds
//! 5. **Axes within columns** - optional axis/column consistency
//! 6. **Chart type** - a supported chart type is selected
//!
//! [`ChartDraft`]: tcs_model::ChartDraft
//! [`ChartConfiguration`]: tcs_model::ChartConfiguration

pub mod checks;
mod engine;
mod issue;
mod result;
pub mod rules;

pub use engine::{collect_issues, validate, validate_field};
pub use issue::Issue;
pub use result::{FieldErrors, ValidationResult};
pub use rules::{FieldLimits, Rule, RulesError, ValidationRules};
