//! File inspection and validation behind the CLI commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::{debug, info_span, trace};

use tcs_core::{ChartSession, Settings};
use tcs_model::{ChartDraft, OptionSet, ParsedTable};
use tcs_validate::ValidationResult;

use crate::logging::redact_value;

/// A parsed file and the options it produced.
#[derive(Debug)]
pub struct InspectReport {
    pub file: PathBuf,
    pub table: Arc<ParsedTable>,
    pub options: OptionSet,
}

/// The outcome of submitting a draft against a file.
#[derive(Debug)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub table: Arc<ParsedTable>,
    pub result: ValidationResult,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Machine-readable form used by `--json`.
    pub fn to_json(&self) -> Value {
        match &self.result {
            ValidationResult::Valid(configuration) => json!({
                "valid": true,
                "configuration": configuration,
            }),
            ValidationResult::Invalid(errors) => json!({
                "valid": false,
                "errors": errors,
            }),
        }
    }
}

/// Load settings from `path`, or from the platform config directory.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("load settings from {}", path.display())),
        None => Settings::load().context("load settings"),
    }
}

/// Parse a file the way an upload would.
pub fn inspect_file(path: &Path, settings: Settings) -> Result<InspectReport> {
    let span = info_span!("inspect", file = %path.display());
    let _guard = span.enter();

    let mut session = ChartSession::with_settings(settings);
    session
        .upload_path(path)
        .with_context(|| format!("parse {}", path.display()))?;
    trace_first_record(session.table());

    Ok(InspectReport {
        file: path.to_path_buf(),
        table: Arc::clone(session.table()),
        options: session.options().clone(),
    })
}

/// Parse a file, fill the form with `draft` and submit it.
pub fn validate_file(path: &Path, draft: ChartDraft, settings: Settings) -> Result<ValidationReport> {
    let span = info_span!("validate", file = %path.display());
    let _guard = span.enter();

    let mut session = ChartSession::with_settings(settings);
    session
        .upload_path(path)
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(options = session.options().len(), "file loaded");

    let ChartDraft {
        chart_type,
        columns,
        x_axes,
        y_axes,
    } = draft;
    session.set_chart_type(chart_type);
    session.set_columns(columns);
    session.set_x_axes(x_axes);
    session.set_y_axes(y_axes);

    let table = Arc::clone(session.table());
    let result = match session.submit() {
        Ok(submitted) => ValidationResult::Valid(submitted.configuration),
        Err(errors) => ValidationResult::Invalid(errors),
    };

    Ok(ValidationReport {
        file: path.to_path_buf(),
        table,
        result,
    })
}

fn trace_first_record(table: &ParsedTable) {
    let Some(record) = table.records.first() else {
        return;
    };
    for (column, value) in record.iter() {
        trace!(column = %column, value = %redact_value(&value.to_string()), "first record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcs_model::Field;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_report_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "name,age\nAda,36\n").unwrap();

        let report = validate_file(&path, ChartDraft::default(), Settings::default()).unwrap();
        assert!(!report.is_valid());
        assert!(report.result.errors().unwrap().has(Field::Columns));

        let value = report.to_json();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"]["chartType"][0], "please select a chart type");
    }
}
