//! Integration tests for inspection and validation reports.

use std::path::PathBuf;

use tcs_cli::report::{inspect_file, load_settings, validate_file};
use tcs_core::{Settings, ValidationMode};
use tcs_model::ChartDraft;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn test_inspect_reports_columns_and_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "name,age,name\nAda,36,x\nGrace,45,y\n");

    let report = inspect_file(&path, Settings::default()).unwrap();

    assert_eq!(report.table.row_count(), 2);
    assert_eq!(report.options.values().collect::<Vec<_>>(), vec!["name", "age"]);
    assert_eq!(report.table.warnings.len(), 1);
}

#[test]
fn test_inspect_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let error = inspect_file(&dir.path().join("absent.csv"), Settings::default()).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn test_valid_configuration_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "name,age,city\nAda,36,London\n");
    let draft = ChartDraft {
        chart_type: Some("line".to_string()),
        columns: strings(&["name", "age"]),
        x_axes: strings(&["name"]),
        y_axes: strings(&["age"]),
    };

    let report = validate_file(&path, draft, Settings::default()).unwrap();

    assert!(report.is_valid());
    assert_eq!(report.to_json()["valid"], true);
    insta::assert_json_snapshot!(report.result.configuration().unwrap(), @r#"
    {
      "chartType": "line",
      "columns": [
        "name",
        "age"
      ],
      "xAxes": [
        "name"
      ],
      "yAxes": [
        "age"
      ]
    }
    "#);
}

#[test]
fn test_stale_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "metrics.csv", "id,value\n1,10\n");
    let draft = ChartDraft {
        chart_type: Some("pie".to_string()),
        columns: strings(&["id", "name"]),
        x_axes: strings(&["id"]),
        y_axes: strings(&["value"]),
    };

    let report = validate_file(&path, draft, Settings::default()).unwrap();

    let json = report.to_json();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"]["columns"][0], "selection no longer valid: 'name'");
}

#[test]
fn test_load_settings_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "settings.toml", "[validation]\nmode = \"on_submit\"\n");

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.validation.mode, ValidationMode::OnSubmit);

    let bad = write_file(&dir, "bad.toml", "[ingest\n");
    assert!(load_settings(Some(&bad)).is_err());
}
