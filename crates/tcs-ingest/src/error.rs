//! Error types for tabular ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or parsing an uploaded file.
///
/// None of these leave partial results behind: on error the caller keeps
/// whatever table it had before.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit.
    #[error("{name} is too large: {size} bytes (limit {max_size} bytes)")]
    FileTooLarge {
        name: String,
        size: u64,
        max_size: u64,
    },

    // === Parse Errors ===
    /// A quoted field was opened and never closed.
    #[error("unterminated quoted field starting at row {row} (byte {byte})")]
    UnterminatedQuote { row: u64, byte: u64 },

    /// Input is not valid UTF-8.
    #[error("invalid UTF-8 at row {row} (byte {byte})")]
    InvalidUtf8 { row: u64, byte: u64 },

    /// Input uses an encoding we do not decode.
    #[error("unsupported encoding {encoding}, save the file as UTF-8")]
    UnsupportedEncoding { encoding: &'static str },

    /// The CSV reader rejected the input.
    #[error("failed to parse {name}: {message}")]
    CsvParse {
        name: String,
        message: String,
        row: Option<u64>,
        byte: Option<u64>,
    },

    // === Format Errors ===
    /// The file is a spreadsheet container we cannot read as text.
    #[error("unsupported file format for {name}: {detected} cannot be parsed, export it as CSV")]
    UnsupportedFormat { name: String, detected: &'static str },

    /// Configured delimiter is not a single-byte character.
    #[error("delimiter {delimiter:?} must be a single ASCII character")]
    InvalidDelimiter { delimiter: char },
}

impl IngestError {
    /// Returns true for malformed-content errors (as opposed to I/O or format).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedQuote { .. }
                | Self::InvalidUtf8 { .. }
                | Self::UnsupportedEncoding { .. }
                | Self::CsvParse { .. }
        )
    }

    /// Returns true when the file type itself is not handled.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Row and byte offset of the failure, when known.
    pub fn position(&self) -> Option<(Option<u64>, Option<u64>)> {
        match self {
            Self::UnterminatedQuote { row, byte } | Self::InvalidUtf8 { row, byte } => {
                Some((Some(*row), Some(*byte)))
            }
            Self::CsvParse { row, byte, .. } if row.is_some() || byte.is_some() => {
                Some((*row, *byte))
            }
            _ => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");

        let err = IngestError::UnterminatedQuote { row: 3, byte: 17 };
        assert_eq!(
            err.to_string(),
            "unterminated quoted field starting at row 3 (byte 17)"
        );
    }

    #[test]
    fn test_error_classification() {
        let parse = IngestError::InvalidUtf8 { row: 1, byte: 4 };
        assert!(parse.is_parse_error());
        assert_eq!(parse.position(), Some((Some(1), Some(4))));

        let format = IngestError::UnsupportedFormat {
            name: "book.xlsx".to_string(),
            detected: "an XLSX workbook",
        };
        assert!(format.is_unsupported_format());
        assert!(!format.is_parse_error());
        assert_eq!(format.position(), None);
    }
}
