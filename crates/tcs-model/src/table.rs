//! Parsed table output.

use serde::Serialize;
use std::fmt;

use crate::cell::RawRecord;
use crate::column::ColumnSet;

/// Non-fatal problem noticed while parsing.
///
/// Rows are 1-based physical record numbers, header included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// Row had fewer cells than the header; missing cells are empty.
    TooFewFields {
        row: u64,
        expected: usize,
        found: usize,
    },
    /// Row had more cells than the header; extra cells were dropped.
    TooManyFields {
        row: u64,
        expected: usize,
        found: usize,
    },
    /// Header repeated a column name; the last occurrence's value is kept.
    DuplicateHeader { column: String },
    /// Header cell was blank and was given a positional name.
    BlankHeader { position: usize, assigned: String },
    /// File was declared as a spreadsheet but decoded as delimited text.
    DeclaredFormatMismatch { declared: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row}: expected {expected} fields but found {found}, missing cells left empty"
            ),
            Self::TooManyFields {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row}: expected {expected} fields but found {found}, extra cells dropped"
            ),
            Self::DuplicateHeader { column } => write!(
                f,
                "duplicate column '{column}' in header, keeping the last value per row"
            ),
            Self::BlankHeader { position, assigned } => write!(
                f,
                "header cell {position} is blank, named it '{assigned}'"
            ),
            Self::DeclaredFormatMismatch { declared } => write!(
                f,
                "file declared as {declared} was read as delimited text"
            ),
        }
    }
}

/// Columns and records from the most recently parsed file.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedTable {
    pub columns: ColumnSet,
    pub records: Vec<RawRecord>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the file had a header but no data rows.
    pub fn is_header_only(&self) -> bool {
        !self.columns.is_empty() && self.records.is_empty()
    }
}
