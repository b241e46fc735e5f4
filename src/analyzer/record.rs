use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Fixed, zero-padded UTC format shared by input parsing and result output.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub status_code: i32,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("log line must have exactly 3 whitespace-separated fields: {line}")]
    FieldCount { line: String },
    #[error("log line has an invalid timestamp (expected YYYY-MM-DDThh:mm:ssZ): {line}")]
    Timestamp { line: String },
    #[error("log line has a non-integer status code: {line}")]
    StatusCode { line: String },
}

/// Parses one raw line of the form `<timestamp> <user_id> <status_code>`.
pub fn parse_line(line: &str) -> Result<LogRecord, FormatError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(FormatError::FieldCount {
            line: line.to_string(),
        });
    }

    let timestamp = NaiveDateTime::parse_from_str(fields[0], TIMESTAMP_FORMAT)
        .map_err(|_| FormatError::Timestamp {
            line: line.to_string(),
        })?
        .and_utc();

    let status_code: i32 = fields[2].parse().map_err(|_| FormatError::StatusCode {
        line: line.to_string(),
    })?;

    Ok(LogRecord {
        timestamp,
        user_id: fields[1].to_string(),
        status_code,
    })
}
