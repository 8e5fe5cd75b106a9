//! CLI library components for Tabular Chart Studio.

pub mod logging;
pub mod report;
