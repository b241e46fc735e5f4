mod detector;
mod record;
mod service;
mod source;
mod state;

pub use detector::find_consecutive_errors;
#[allow(unused_imports)]
pub use record::{FormatError, LogRecord, parse_line};
pub use service::{AnalysisError, run_analysis};
pub use source::{FileLineSource, LineSource, SourceError};
pub use state::Detection;
