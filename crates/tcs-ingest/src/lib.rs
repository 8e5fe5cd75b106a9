//! Tabular file ingestion.
//!
//! Turns an uploaded buffer of unknown shape into a [`ParsedTable`]: the
//! column set discovered from the header row plus one record per data row.
//!
//! # Features
//!
//! - **CSV Parsing**: delimiter auto-detection, BOM handling, quoted fields
//! - **Format Detection**: binary XLSX/XLS workbooks are rejected with
//!   [`IngestError::UnsupportedFormat`]; Excel-declared text is parsed as CSV
//! - **Strict Failures**: unterminated quotes and invalid UTF-8 are reported
//!   with row and byte offsets instead of producing a partial table
//!
//! # Example
//!
//! ```ignore
//! use tcs_ingest::{ParseOptions, SourceHint, parse_table};
//!
//! let table = parse_table(b"name,age\nAda,36\n", &SourceHint::named("people.csv"), &ParseOptions::default())?;
//! assert_eq!(table.columns.len(), 2);
//! ```
//!
//! [`ParsedTable`]: tcs_model::ParsedTable

mod csv;
mod error;
mod format;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    CANDIDATE_DELIMITERS, check_file_size_with_limit, detect_delimiter,
    normalize_header, parse_table, read_table,
};

// === Format Detection ===
pub use format::{
    ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES, DeclaredFormat, SourceHint,
    sniff_binary_spreadsheet,
};

// === Options ===
pub use options::{MAX_FILE_SIZE, ParseOptions};
