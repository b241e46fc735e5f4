use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::{LogRecord, TIMESTAMP_FORMAT};

const SERVER_ERROR_STATUS: i32 = 500;
const CONSECUTIVE_THRESHOLD: u32 = 2;

/// Winning run, reported as the user plus the first two error timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub user_id: String,
    pub error_timestamps: Vec<String>,
}

/// Transient per-scan state: one run per user seen so far, plus the
/// currently accepted candidate. Discarded when the scan returns.
#[derive(Debug, Default)]
pub(crate) struct ScanState {
    runs: HashMap<String, ErrorRun>,
    candidate: Option<Candidate>,
}

#[derive(Debug, Default)]
struct ErrorRun {
    count: u32,
    timestamps: Vec<DateTime<Utc>>,
}

#[derive(Debug)]
struct Candidate {
    user_id: String,
    anchor: DateTime<Utc>,
    first_two: [DateTime<Utc>; 2],
}

impl ScanState {
    /// Feeds one record, in sorted order. Any non-500 for a user resets
    /// that user's run; other users' records never touch it.
    pub(crate) fn observe(&mut self, record: &LogRecord) {
        let run = self.runs.entry(record.user_id.clone()).or_default();

        if record.status_code != SERVER_ERROR_STATUS {
            run.count = 0;
            run.timestamps.clear();
            return;
        }

        run.count += 1;
        run.timestamps.push(record.timestamp);

        // A run is judged once, at the moment it crosses the threshold.
        // Growing past it never re-opens the question for that run.
        if run.count != CONSECUTIVE_THRESHOLD {
            return;
        }

        let anchor = run.timestamps[0];
        let replaces = match &self.candidate {
            None => true,
            Some(current) => anchor < current.anchor,
        };
        if replaces {
            self.candidate = Some(Candidate {
                user_id: record.user_id.clone(),
                anchor,
                first_two: [run.timestamps[0], run.timestamps[1]],
            });
        }
    }

    pub(crate) fn into_detection(self) -> Option<Detection> {
        self.candidate.map(|candidate| Detection {
            user_id: candidate.user_id,
            error_timestamps: candidate
                .first_two
                .iter()
                .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::super::record::LogRecord;
    use super::ScanState;

    fn record(secs: u32, user: &str, status: i32) -> LogRecord {
        LogRecord {
            timestamp: Utc.with_ymd_and_hms(2025, 4, 11, 13, 45, secs).unwrap(),
            user_id: user.to_string(),
            status_code: status,
        }
    }

    #[test]
    fn a_success_between_two_errors_resets_the_run() {
        let mut state = ScanState::default();
        state.observe(&record(0, "user123", 500));
        state.observe(&record(5, "user123", 200));
        state.observe(&record(10, "user123", 500));

        assert!(state.into_detection().is_none());
    }

    #[test]
    fn captures_only_the_first_two_timestamps_of_a_longer_run() {
        let mut state = ScanState::default();
        state.observe(&record(0, "user123", 500));
        state.observe(&record(5, "user123", 500));
        state.observe(&record(10, "user123", 500));

        let detection = state.into_detection().expect("run should qualify");
        assert_eq!(
            detection.error_timestamps,
            vec!["2025-04-11T13:45:00Z", "2025-04-11T13:45:05Z"]
        );
    }

    #[test]
    fn a_strictly_earlier_anchor_replaces_the_accepted_candidate() {
        let mut state = ScanState::default();
        state.observe(&record(0, "user456", 500));
        state.observe(&record(10, "user123", 500));
        state.observe(&record(12, "user123", 500));
        state.observe(&record(15, "user456", 500));

        let detection = state.into_detection().expect("run should qualify");
        assert_eq!(detection.user_id, "user456");
        assert_eq!(
            detection.error_timestamps,
            vec!["2025-04-11T13:45:00Z", "2025-04-11T13:45:15Z"]
        );
    }

    #[test]
    fn an_equal_anchor_keeps_the_first_accepted_candidate() {
        let mut state = ScanState::default();
        state.observe(&record(0, "userA", 500));
        state.observe(&record(0, "userB", 500));
        state.observe(&record(5, "userA", 500));
        state.observe(&record(5, "userB", 500));

        let detection = state.into_detection().expect("run should qualify");
        assert_eq!(detection.user_id, "userA");
    }

    #[test]
    fn a_later_reset_does_not_discard_a_captured_candidate() {
        let mut state = ScanState::default();
        state.observe(&record(0, "user123", 500));
        state.observe(&record(5, "user123", 500));
        state.observe(&record(10, "user123", 200));

        let detection = state.into_detection().expect("capture should survive the reset");
        assert_eq!(detection.user_id, "user123");
    }
}
