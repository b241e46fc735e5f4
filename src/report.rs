use crate::analyzer::Detection;
use crate::config::ReportFormat;

/// Accepts human-readable analysis notices for display.
pub trait ReportSink {
    fn publish(&mut self, text: &str);
}

/// Writes notices to stdout.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn publish(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub(crate) fn render_detection(detection: &Detection, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => format!(
            "Found consecutive errors for user: {}\nError timestamps: [{}]",
            detection.user_id,
            detection.error_timestamps.join(", ")
        ),
        ReportFormat::Json => match serde_json::to_string(detection) {
            Ok(json) => json,
            Err(error) => {
                log::warn!("failed to render detection as JSON: {}", error);
                String::new()
            }
        },
    }
}

pub(crate) fn render_none_found(format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => "No consecutive 500 errors found.".to_string(),
        ReportFormat::Json => "null".to_string(),
    }
}
