//! Integration tests for upload parsing.

use proptest::prelude::*;
use tcs_ingest::{IngestError, ParseOptions, SourceHint, parse_table};
use tcs_model::{CellValue, ParseWarning, ParsedTable, options_for};

fn parse_named(name: &str, content: &[u8]) -> Result<ParsedTable, IngestError> {
    parse_table(content, &SourceHint::named(name), &ParseOptions::default())
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn test_people_csv_discovers_columns() {
    let table = parse_named(
        "people.csv",
        b"name,age,city\nAda,36,London\nAlan,41,Wilmslow\nGrace,85,Arlington\n",
    )
    .unwrap();

    assert_eq!(table.columns.as_slice(), &["name", "age", "city"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.records[2].get("name"), Some(&text("Grace")));
}

#[test]
fn test_duplicate_header_last_write_wins() {
    let table = parse_named("dup.csv", b"a,b,a\n1,2,3\n").unwrap();

    assert_eq!(table.columns.as_slice(), &["a", "b"]);
    assert_eq!(table.records[0].get("a"), Some(&text("3")));
    assert_eq!(table.records[0].get("b"), Some(&text("2")));
    assert!(table.warnings.contains(&ParseWarning::DuplicateHeader {
        column: "a".to_string()
    }));
}

#[test]
fn test_duplicate_header_short_row_takes_last_position() {
    let table = parse_named("dup.csv", b"a,b,a\n1,2\n").unwrap();

    assert_eq!(table.records[0].get("a"), Some(&CellValue::Empty));
    assert_eq!(table.records[0].get("b"), Some(&text("2")));
    assert!(table.warnings.contains(&ParseWarning::TooFewFields {
        row: 2,
        expected: 3,
        found: 2
    }));
}

#[test]
fn test_single_column_empty_cells_are_rows() {
    let table = parse_named("names.csv", b"name\nAda\n\"\"\n\nBob\n").unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.records[1].get("name"), Some(&CellValue::Empty));
    assert_eq!(table.records[2].get("name"), Some(&text("Bob")));
}

#[test]
fn test_header_only_file_still_yields_options() {
    let table = parse_named("empty.csv", b"name,age,city\n").unwrap();

    assert!(table.records.is_empty());
    let options = options_for(&table.columns);
    assert_eq!(options.values().collect::<Vec<_>>(), vec!["name", "age", "city"]);
}

#[test]
fn test_unterminated_quote_is_an_error() {
    let result = parse_named("broken.csv", b"a,b\n1,\"never closed\n2,3\n");
    let err = result.unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.position(), Some((Some(2), Some(6))));
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let err = parse_named("latin1.csv", b"name\ncaf\xe9\n").unwrap_err();
    assert!(matches!(err, IngestError::InvalidUtf8 { row: 2, byte: 8 }));
}

#[test]
fn test_binary_xlsx_is_unsupported() {
    let err = parse_named("book.xlsx", b"PK\x03\x04\x14\x00\x06\x00").unwrap_err();
    assert!(err.is_unsupported_format());
}

#[test]
fn test_binary_detected_even_when_named_csv() {
    let err = parse_named("book.csv", b"PK\x03\x04\x14\x00").unwrap_err();
    assert!(err.is_unsupported_format());
}

#[test]
fn test_excel_declared_text_is_parsed_with_warning() {
    let hint = SourceHint::named("export.xls").with_mime_type("application/vnd.ms-excel");
    let table = parse_table(b"id,value\n1,10\n", &hint, &ParseOptions::default()).unwrap();

    assert_eq!(table.columns.as_slice(), &["id", "value"]);
    assert_eq!(
        table.warnings,
        vec![ParseWarning::DeclaredFormatMismatch {
            declared: "XLS".to_string()
        }]
    );
}

#[test]
fn test_excel_declared_non_text_is_unsupported() {
    let err = parse_named("weird.xlsx", b"\x00\x01\xff\xfe\xfd").unwrap_err();
    assert!(err.is_unsupported_format());
}

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z0-9 ]{0,6}", "[a-z]{1,3},[a-z]{1,3}", "\"?[a-z]{0,3}\"?"]
}

fn csv_quote(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

proptest! {
    #[test]
    fn parsing_is_idempotent(
        header in prop::collection::vec("[a-c]{1,2}", 1..5),
        rows in prop::collection::vec(prop::collection::vec(cell_strategy(), 1..5), 0..6),
    ) {
        let mut content = header.join(",");
        content.push('\n');
        for row in &rows {
            let line: Vec<String> = row.iter().map(|c| csv_quote(c)).collect();
            content.push_str(&line.join(","));
            content.push('\n');
        }

        let options = ParseOptions::default().with_delimiter(',');
        let first = parse_table(content.as_bytes(), &SourceHint::default(), &options);
        let second = parse_table(content.as_bytes(), &SourceHint::default(), &options);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }
}
