use serde::Deserialize;

use super::defaults::*;

/// Outer-surface settings only. The detection semantics (the 500 status,
/// the run threshold of two, the timestamp format) are fixed and not
/// configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default)]
    pub report: Report,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default = "default_report_format")]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}
