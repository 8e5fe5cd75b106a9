//! Tabular Chart Studio data model.
//!
//! Types shared by the parser, the validator and the form session:
//!
//! - **Table data**: [`ColumnSet`], [`RawRecord`], [`CellValue`], [`ParsedTable`]
//! - **Option model**: [`SelectOption`], [`OptionSet`], [`options_for`]
//! - **Chart form**: [`ChartType`], [`Field`], [`ChartDraft`], [`ChartConfiguration`]

mod cell;
mod chart;
mod column;
mod options;
mod table;

// === Table Data ===
pub use cell::{CellValue, RawRecord};
pub use column::ColumnSet;
pub use table::{ParseWarning, ParsedTable};

// === Option Model ===
pub use options::{OptionSet, SelectOption, options_for};

// === Chart Form ===
pub use chart::{ChartConfiguration, ChartDraft, ChartType, Field};
