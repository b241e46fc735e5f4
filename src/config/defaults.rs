use super::schema::{Config, Report, ReportFormat};

pub(super) fn default_input_path() -> String {
    "access.log".to_string()
}

pub(super) fn default_report_format() -> ReportFormat {
    ReportFormat::Text
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            report: Report::default(),
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self {
            format: default_report_format(),
        }
    }
}
