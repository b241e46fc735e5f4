use thiserror::Error;

use crate::config::Config;
use crate::report::{ReportSink, render_detection, render_none_found};

use super::detector::find_consecutive_errors;
use super::record::FormatError;
use super::source::{LineSource, SourceError};
use super::state::Detection;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Runs one full analysis pass: read the lines, detect, publish a notice.
/// The published notice is observational; the returned value is the
/// contract.
pub fn run_analysis<S: LineSource>(
    config: &Config,
    source: &mut S,
    sink: &mut dyn ReportSink,
) -> Result<Option<Detection>, AnalysisError> {
    let lines = source.read_lines()?;

    tracing::info!(
        target: "analyzer",
        module = "analyzer",
        line_count = lines.len(),
        "scan_started"
    );

    let detection = find_consecutive_errors(&lines)?;

    match &detection {
        Some(detection) => {
            log::info!(
                "consecutive_errors_found user={} first={} second={}",
                detection.user_id,
                detection.error_timestamps[0],
                detection.error_timestamps[1]
            );
            sink.publish(&render_detection(detection, config.report.format));
        }
        None => {
            log::info!("consecutive_errors_not_found");
            sink.publish(&render_none_found(config.report.format));
        }
    }

    Ok(detection)
}
