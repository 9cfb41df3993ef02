//! Interval-table scheduler.

use crate::error::{EngineError, Result};
use crate::types::Review;
use chrono::{DateTime, Duration, Utc};

/// Days until the next review, indexed by success count. Counts past the end
/// of the table reuse the last entry rather than extrapolating.
pub const INTERVAL_DAYS: [i64; 5] = [1, 3, 7, 14, 30];

/// Compute the next due date for a non-empty review history.
///
/// The interval is looked up by the number of successful reviews across the
/// entire history and added to the timestamp of the chronologically last
/// review (on equal timestamps, the latest-appended entry wins).
///
/// # Errors
/// [`EngineError::EmptyHistory`] if `history` has no entries. Callers that
/// hold a possibly-empty history must guard before calling.
pub fn next_due(history: &[Review]) -> Result<DateTime<Utc>> {
    let last = history
        .iter()
        .max_by_key(|r| r.reviewed_at)
        .ok_or(EngineError::EmptyHistory)?;
    let successes = history.iter().filter(|r| r.success).count();
    let index = successes.min(INTERVAL_DAYS.len() - 1);
    Ok(last.reviewed_at + Duration::days(INTERVAL_DAYS[index]))
}
