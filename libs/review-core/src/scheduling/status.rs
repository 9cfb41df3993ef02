//! Mastery status classifier.

use crate::types::{Review, Status};
use chrono::{DateTime, Utc};

/// Successful reviews required before a problem counts as mastered.
/// Independent of the interval table length.
pub const MASTERY_THRESHOLD: usize = 4;

/// Derive the display status for a review history.
///
/// Rules apply in order and the first match wins:
/// 1. at least [`MASTERY_THRESHOLD`] successes is `Mastered`, whatever the
///    due date says
/// 2. an empty history is `NotStarted`
/// 3. a due date on or before `now`'s calendar day is `DueForReview`
/// 4. anything else is `InProgress`
///
/// Due dates compare at day granularity: a problem due earlier today is
/// already due, and a problem due later today is due as well.
pub fn classify(
    history: &[Review],
    next_due: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Status {
    let successes = history.iter().filter(|r| r.success).count();
    if successes >= MASTERY_THRESHOLD {
        return Status::Mastered;
    }
    if history.is_empty() {
        return Status::NotStarted;
    }
    match next_due {
        Some(due) if due.date_naive() <= now.date_naive() => Status::DueForReview,
        _ => Status::InProgress,
    }
}
