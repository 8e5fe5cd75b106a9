//! Ordered rule list.
//!
//! Rules run in [`Rule::ORDER`]; within a rule, fields are visited in
//! `columns`, `xAxes`, `yAxes` order. The order decides which message a field
//! shows first when it breaks several rules.

mod limits;

pub use limits::{FieldLimits, RulesError, ValidationRules};

use tcs_model::{ChartDraft, OptionSet};

use crate::checks;
use crate::issue::Issue;

/// A validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Cardinality,
    Uniqueness,
    Membership,
    EntryLength,
    AxesWithinColumns,
    ChartTypePresence,
}

impl Rule {
    /// Evaluation order.
    pub const ORDER: [Rule; 6] = [
        Rule::Cardinality,
        Rule::Uniqueness,
        Rule::Membership,
        Rule::EntryLength,
        Rule::AxesWithinColumns,
        Rule::ChartTypePresence,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Cardinality => "Cardinality",
            Rule::Uniqueness => "Uniqueness",
            Rule::Membership => "Membership",
            Rule::EntryLength => "Entry Length",
            Rule::AxesWithinColumns => "Axes Within Columns",
            Rule::ChartTypePresence => "Chart Type",
        }
    }

    /// Description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::Cardinality => "Each field has a minimum and maximum number of selections",
            Rule::Uniqueness => "A column may be selected only once per field",
            Rule::Membership => "Selections must be columns of the current file",
            Rule::EntryLength => "Selected column names must fit the length bounds",
            Rule::AxesWithinColumns => "Axes must be among the selected columns",
            Rule::ChartTypePresence => "A supported chart type must be selected",
        }
    }

    /// Whether the rule runs under the given configuration.
    pub fn is_enabled(&self, rules: &ValidationRules) -> bool {
        match self {
            Rule::EntryLength => rules.check_entry_length,
            Rule::AxesWithinColumns => rules.axes_within_columns,
            _ => true,
        }
    }

    /// Run this rule against a draft.
    pub fn evaluate(
        &self,
        draft: &ChartDraft,
        options: &OptionSet,
        rules: &ValidationRules,
    ) -> Vec<Issue> {
        match self {
            Rule::Cardinality => checks::cardinality::check(draft, rules),
            Rule::Uniqueness => checks::uniqueness::check(draft),
            Rule::Membership => checks::membership::check(draft, options),
            Rule::EntryLength => checks::length::check(draft, rules),
            Rule::AxesWithinColumns => checks::axes::check(draft),
            Rule::ChartTypePresence => checks::presence::check(draft),
        }
    }
}
