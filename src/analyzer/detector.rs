use super::record::{FormatError, parse_line};
use super::state::{Detection, ScanState};

/// Finds the first user who received two or more consecutive HTTP 500
/// responses.
///
/// Lines may arrive in any order; records are stable-sorted by timestamp
/// before the scan, so equal timestamps keep their input order.
/// Consecutiveness is judged per user: other users' records in between do
/// not break a run. Among qualifying users the winner is the one whose run
/// started earliest. A single malformed line fails the whole call.
pub fn find_consecutive_errors(lines: &[String]) -> Result<Option<Detection>, FormatError> {
    let mut records = lines
        .iter()
        .map(|line| parse_line(line))
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by_key(|record| record.timestamp);

    let mut state = ScanState::default();
    for record in &records {
        state.observe(record);
    }

    Ok(state.into_detection())
}
