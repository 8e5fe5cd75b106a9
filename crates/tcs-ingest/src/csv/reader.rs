//! Delimited-text parsing into columns and records.

use std::path::Path;

use csv::{Position, StringRecord};
use tcs_model::{CellValue, ParseWarning, ParsedTable, RawRecord};

use crate::error::{IngestError, Result};
use crate::format::{DeclaredFormat, SourceHint, sniff_binary_spreadsheet};
use crate::options::ParseOptions;

use super::header::{HeaderLayout, layout_from_header, positional_layout};
use super::scan::{check_quotes, decode_utf8, detect_delimiter};

/// Check file size against a limit before loading.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            name: path.display().to_string(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Reads and parses a file from disk.
pub fn read_table(path: &Path, options: &ParseOptions) -> Result<ParsedTable> {
    check_file_size_with_limit(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    parse_table(&bytes, &SourceHint::from_path(path), options)
}

/// Parses an uploaded buffer into a column set and records.
///
/// - An empty buffer yields an empty table; a header-only file yields
///   columns and no records. Neither is an error.
/// - Repeated header names collapse into one column; each record keeps the
///   value from the last repeated position.
/// - Short rows are padded with empty cells, long rows are truncated, and
///   both are reported as warnings.
pub fn parse_table(bytes: &[u8], hint: &SourceHint, options: &ParseOptions) -> Result<ParsedTable> {
    let name = hint.display_name();
    let size = bytes.len() as u64;
    if size > options.max_file_size {
        return Err(IngestError::FileTooLarge {
            name: name.to_string(),
            size,
            max_size: options.max_file_size,
        });
    }

    let declared = DeclaredFormat::from_hint(hint);
    if let Some(detected) = sniff_binary_spreadsheet(bytes) {
        tracing::warn!(file = name, detected, "rejecting binary spreadsheet");
        return Err(IngestError::UnsupportedFormat {
            name: name.to_string(),
            detected,
        });
    }

    let (text, bom_len) = match decode_utf8(bytes) {
        Ok(decoded) => decoded,
        Err(_) if declared.is_spreadsheet() => {
            return Err(IngestError::UnsupportedFormat {
                name: name.to_string(),
                detected: "a spreadsheet that is not delimited text",
            });
        }
        Err(e) => return Err(e),
    };

    let delimiter = match options.delimiter_byte()? {
        Some(delimiter) => delimiter,
        None => detect_delimiter(text),
    };
    check_quotes(text, delimiter).map_err(|e| match e {
        IngestError::UnterminatedQuote { row, byte } => IngestError::UnterminatedQuote {
            row,
            byte: byte + bom_len,
        },
        other => other,
    })?;

    let mut warnings = Vec::new();
    if declared.is_spreadsheet() {
        warnings.push(ParseWarning::DeclaredFormatMismatch {
            declared: declared.label().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    // Physically empty lines never reach here; csv skips them. A line holding
    // a single empty or `""` cell is a real row.
    let rows: Vec<StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| csv_error(name, &e, bom_len))?;

    let mut rows = rows.into_iter();
    let layout = if options.has_header {
        match rows.next() {
            Some(header) => layout_from_header(header.iter(), &mut warnings),
            None => positional_layout(0),
        }
    } else {
        positional_layout(rows.as_slice().first().map_or(0, StringRecord::len))
    };

    let records: Vec<RawRecord> = rows
        .map(|row| build_record(&row, &layout, options.dynamic_typing, &mut warnings))
        .collect();

    for warning in &warnings {
        tracing::warn!(file = name, "{warning}");
    }
    tracing::debug!(
        file = name,
        format = declared.label(),
        delimiter = %char::from(delimiter).escape_default(),
        columns = layout.columns.len(),
        rows = records.len(),
        "parsed table"
    );

    Ok(ParsedTable {
        columns: layout.columns,
        records,
        warnings,
    })
}

fn build_record(
    row: &StringRecord,
    layout: &HeaderLayout,
    dynamic_typing: bool,
    warnings: &mut Vec<ParseWarning>,
) -> RawRecord {
    let line = row.position().map_or(0, Position::line);
    let expected = layout.width();
    let found = row.len();
    if found < expected {
        warnings.push(ParseWarning::TooFewFields {
            row: line,
            expected,
            found,
        });
    } else if found > expected {
        warnings.push(ParseWarning::TooManyFields {
            row: line,
            expected,
            found,
        });
    }

    let mut record = RawRecord::with_capacity(layout.columns.len());
    for (name, cell) in layout.positions.iter().zip(row.iter()) {
        let value = if dynamic_typing {
            CellValue::from_text_typed(cell)
        } else {
            CellValue::from_text(cell)
        };
        record.insert(name, value);
    }
    // Missing cells still take part in last-write-wins for duplicate names.
    for name in layout.positions.iter().skip(found) {
        record.insert(name, CellValue::Empty);
    }
    record
}

fn csv_error(name: &str, err: &csv::Error, bom_len: u64) -> IngestError {
    let position = err.position();
    IngestError::CsvParse {
        name: name.to_string(),
        message: err.to_string(),
        row: position.map(Position::line),
        byte: position.map(|p| p.byte() + bom_len),
    }
}
