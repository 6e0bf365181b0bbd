//! Errors raised by the aggregation pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Contract violations by callers of the pipeline.
///
/// Everything else (empty input, zero totals) is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("duration must be non-negative, got {seconds}s")]
    InvalidDuration { seconds: i64 },

    #[error("date range ends before it starts: {start} > {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
