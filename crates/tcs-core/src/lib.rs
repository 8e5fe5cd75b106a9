//! Chart form session.
//!
//! Ties the parser and the validator together behind [`ChartSession`]:
//!
//! - **Uploads**: ticketed so only the most recent upload is ever applied
//! - **Reset**: an applied upload replaces columns and options and clears the draft
//! - **Validation**: every edit re-validates; subscribers get per-field diffs
//! - **Settings**: TOML configuration for parsing and validation

mod change;
mod error;
mod session;
mod settings;

pub use change::{ChangeCause, SubscriptionId, ValidationChange, changed_fields};
pub use error::{Result, SettingsError};
pub use session::{ChartSession, SubmittedChart, UploadOutcome, UploadTicket};
pub use settings::{Settings, ValidationMode, ValidationSettings};
