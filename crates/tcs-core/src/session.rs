//! Chart form session.
//!
//! Owns the most recently parsed table, the options derived from it and the
//! in-progress draft. Every edit re-runs full validation against the current
//! options; every applied upload replaces the table and clears the draft.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tcs_ingest::{IngestError, SourceHint, parse_table, read_table};
use tcs_model::{
    ChartConfiguration, ChartDraft, Field, OptionSet, ParsedTable, SelectOption, options_for,
};
use tcs_validate::{FieldErrors, ValidationResult, ValidationRules, validate};

use crate::change::{ChangeCause, SubscriptionId, ValidationChange, changed_fields};
use crate::settings::{Settings, ValidationMode};

type Listener = Box<dyn FnMut(&ValidationChange)>;

// =============================================================================
// UPLOAD SEQUENCING
// =============================================================================

/// Tags one upload so a late completion can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    /// Sequence number; later uploads have larger ids.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What happened to a completed upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The table replaced the previous one and the draft was reset.
    Applied { columns: usize, rows: usize },
    /// A newer upload was started; this result was discarded.
    Superseded {
        ticket: UploadTicket,
        latest: UploadTicket,
    },
    /// The ticket was already completed; this result was discarded.
    AlreadyCompleted { ticket: UploadTicket },
}

impl UploadOutcome {
    /// Returns true if the upload changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// A configuration handed out by a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedChart {
    pub configuration: ChartConfiguration,
    /// The table the configuration was validated against.
    pub table: Arc<ParsedTable>,
}

// =============================================================================
// SESSION
// =============================================================================

/// Form state for one user.
///
/// Single-threaded; parsing may happen elsewhere and be brought back through
/// [`ChartSession::complete_upload`] with the ticket it was started under.
pub struct ChartSession {
    settings: Settings,
    table: Arc<ParsedTable>,
    options: OptionSet,
    draft: ChartDraft,
    result: ValidationResult,
    visible: FieldErrors,
    submit_attempted: bool,
    latest_ticket: u64,
    pending: Option<UploadTicket>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ChartSession {
    /// Create a session with default settings and no file loaded.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a session with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        let table = Arc::new(ParsedTable::default());
        let options = OptionSet::default();
        let draft = ChartDraft::default();
        let result = validate(&draft, &options, &settings.validation.rules);
        let mut session = Self {
            settings,
            table,
            options,
            draft,
            result,
            visible: FieldErrors::default(),
            submit_attempted: false,
            latest_ticket: 0,
            pending: None,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        session.visible = session.compute_visible();
        session
    }

    // === Accessors ===

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.settings.validation.rules
    }

    pub fn mode(&self) -> ValidationMode {
        self.settings.validation.mode
    }

    /// The current table (empty before the first upload).
    pub fn table(&self) -> &Arc<ParsedTable> {
        &self.table
    }

    /// Column options for the current table.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Options for the chart type selector.
    pub fn chart_type_options(&self) -> Vec<SelectOption> {
        tcs_model::ChartType::options()
    }

    pub fn draft(&self) -> &ChartDraft {
        &self.draft
    }

    /// Full validation result for the current draft.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Errors a form should display right now.
    ///
    /// In [`ValidationMode::OnSubmit`] this stays empty until the first
    /// submit attempt.
    pub fn visible_errors(&self) -> &FieldErrors {
        &self.visible
    }

    /// Returns true while the latest upload has not completed.
    pub fn upload_pending(&self) -> bool {
        self.pending.is_some()
    }

    // === Uploads ===

    /// Start an upload and get the ticket its result must be completed with.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.latest_ticket += 1;
        let ticket = UploadTicket(self.latest_ticket);
        if let Some(previous) = self.pending.replace(ticket) {
            tracing::debug!(
                previous = previous.id(),
                ticket = ticket.id(),
                "upload started while another was pending"
            );
        }
        ticket
    }

    /// Finish an upload.
    ///
    /// Only the pending latest ticket is applied, once. Results for older or
    /// already completed tickets are discarded, errors included. A failed
    /// latest upload leaves the previous table, options and draft in place.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        parsed: Result<ParsedTable, IngestError>,
    ) -> Result<UploadOutcome, IngestError> {
        let latest = UploadTicket(self.latest_ticket);
        if self.pending != Some(ticket) && ticket == latest {
            tracing::warn!(
                ticket = ticket.id(),
                failed = parsed.is_err(),
                "discarding repeated upload completion"
            );
            return Ok(UploadOutcome::AlreadyCompleted { ticket });
        }
        if ticket != latest {
            tracing::warn!(
                ticket = ticket.id(),
                latest = latest.id(),
                failed = parsed.is_err(),
                "discarding superseded upload"
            );
            return Ok(UploadOutcome::Superseded { ticket, latest });
        }
        self.pending = None;

        let table = match parsed {
            Ok(table) => table,
            Err(error) => {
                tracing::warn!(ticket = ticket.id(), %error, "upload failed, keeping previous file");
                return Err(error);
            }
        };

        let outcome = UploadOutcome::Applied {
            columns: table.columns.len(),
            rows: table.row_count(),
        };
        tracing::info!(
            ticket = ticket.id(),
            columns = table.columns.len(),
            rows = table.row_count(),
            warnings = table.warnings.len(),
            "applied upload"
        );

        self.options = options_for(&table.columns);
        self.table = Arc::new(table);
        self.draft.reset();
        self.submit_attempted = false;
        self.recompute(ChangeCause::Upload);
        Ok(outcome)
    }

    /// Parse a buffer and apply it in one step.
    pub fn upload(&mut self, bytes: &[u8], hint: &SourceHint) -> Result<UploadOutcome, IngestError> {
        let ticket = self.begin_upload();
        let parsed = parse_table(bytes, hint, &self.settings.ingest);
        self.complete_upload(ticket, parsed)
    }

    /// Read a file from disk and apply it in one step.
    pub fn upload_path(&mut self, path: &Path) -> Result<UploadOutcome, IngestError> {
        let ticket = self.begin_upload();
        let parsed = read_table(path, &self.settings.ingest);
        self.complete_upload(ticket, parsed)
    }

    // === Form Edits ===

    /// Set or clear the raw chart type value.
    pub fn set_chart_type(&mut self, value: Option<String>) -> &ValidationResult {
        tracing::debug!(value = ?value, "chart type changed");
        self.draft.chart_type = value;
        self.recompute(ChangeCause::Edit(Field::ChartType));
        &self.result
    }

    pub fn set_columns(&mut self, values: Vec<String>) -> &ValidationResult {
        self.set_selection(Field::Columns, values)
    }

    pub fn set_x_axes(&mut self, values: Vec<String>) -> &ValidationResult {
        self.set_selection(Field::XAxes, values)
    }

    pub fn set_y_axes(&mut self, values: Vec<String>) -> &ValidationResult {
        self.set_selection(Field::YAxes, values)
    }

    /// Replace a multi-select field. [`Field::ChartType`] is left untouched.
    pub fn set_selection(&mut self, field: Field, values: Vec<String>) -> &ValidationResult {
        if field == Field::ChartType {
            tracing::debug!("ignoring selection edit for chart type");
            return &self.result;
        }
        tracing::debug!(field = %field, count = values.len(), "selection changed");
        self.draft.set_selection(field, values);
        self.recompute(ChangeCause::Edit(field));
        &self.result
    }

    /// Add `value` to a multi-select field, or remove it if already chosen.
    pub fn toggle(&mut self, field: Field, value: &str) -> &ValidationResult {
        let mut values = self.draft.selection(field).to_vec();
        match values.iter().position(|v| v == value) {
            Some(index) => {
                values.remove(index);
            }
            None => values.push(value.to_string()),
        }
        self.set_selection(field, values)
    }

    /// Clear the draft without touching the table.
    pub fn reset_draft(&mut self) {
        self.draft.reset();
        self.submit_attempted = false;
        self.recompute(ChangeCause::Reset);
    }

    // === Submit ===

    /// Attempt to submit the draft.
    ///
    /// On success the draft is cleared and the configuration is returned with
    /// the table it was validated against. On failure the draft is kept and
    /// errors become visible in every mode.
    pub fn submit(&mut self) -> Result<SubmittedChart, FieldErrors> {
        self.submit_attempted = true;
        self.recompute(ChangeCause::Submit);

        match &self.result {
            ValidationResult::Valid(configuration) => {
                let submitted = SubmittedChart {
                    configuration: configuration.clone(),
                    table: Arc::clone(&self.table),
                };
                tracing::info!(
                    chart_type = %submitted.configuration.chart_type,
                    columns = submitted.configuration.columns.len(),
                    "submitted chart configuration"
                );
                self.draft.reset();
                self.submit_attempted = false;
                self.recompute(ChangeCause::Reset);
                Ok(submitted)
            }
            ValidationResult::Invalid(errors) => {
                tracing::debug!(issues = errors.issue_count(), "submit rejected");
                Err(errors.clone())
            }
        }
    }

    // === Subscriptions ===

    /// Register a listener for validation changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&ValidationChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // === Internals ===

    fn compute_visible(&self) -> FieldErrors {
        let show = match self.settings.validation.mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.submit_attempted,
        };
        match (&self.result, show) {
            (ValidationResult::Invalid(errors), true) => errors.clone(),
            _ => FieldErrors::default(),
        }
    }

    fn recompute(&mut self, cause: ChangeCause) {
        let was_valid = self.result.is_valid();
        self.result = validate(&self.draft, &self.options, &self.settings.validation.rules);
        let visible = self.compute_visible();
        let changed = changed_fields(&self.visible, &visible);
        self.visible = visible;

        let valid = self.result.is_valid();
        if changed.is_empty() && valid == was_valid && cause != ChangeCause::Upload {
            return;
        }

        let change = ValidationChange {
            cause,
            changed,
            valid,
            visible: self.visible.clone(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChartSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartSession")
            .field("columns", &self.table.columns)
            .field("rows", &self.table.row_count())
            .field("draft", &self.draft)
            .field("valid", &self.result.is_valid())
            .field("latest_ticket", &self.latest_ticket)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint() -> SourceHint {
        SourceHint::named("data.csv")
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ChartSession::new();
        assert!(session.options().is_empty());
        assert!(session.draft().is_empty());
        assert!(!session.result().is_valid());
        assert!(!session.upload_pending());
    }

    #[test]
    fn test_tickets_increase() {
        let mut session = ChartSession::new();
        let first = session.begin_upload();
        let second = session.begin_upload();
        assert!(second > first);
        assert!(session.upload_pending());
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut session = ChartSession::new();
        session.upload(b"a,b,c\n1,2,3\n", &hint()).unwrap();

        session.toggle(Field::Columns, "a");
        session.toggle(Field::Columns, "c");
        assert_eq!(session.draft().columns, vec!["a", "c"]);
        session.toggle(Field::Columns, "a");
        assert_eq!(session.draft().columns, vec!["c"]);
    }

    #[test]
    fn test_chart_type_selection_edit_ignored() {
        let mut session = ChartSession::new();
        session.set_selection(Field::ChartType, vec!["bar".to_string()]);
        assert!(session.draft().chart_type.is_none());
    }

    #[test]
    fn test_unsubscribe() {
        let mut session = ChartSession::new();
        let id = session.subscribe(|_| {});
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
    }
}
