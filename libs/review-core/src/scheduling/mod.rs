//! Review scheduling and status engine.
//!
//! Three pure operations over a problem's review history:
//! - [`next_due`]: interval-table scheduler
//! - [`classify`]: mastery status classifier
//! - [`record`]: applies one review outcome, the single mutation entry point
//!
//! All three are deterministic and free of I/O; `now` is always supplied by
//! the caller.

pub mod scheduler;
pub mod status;

pub use scheduler::{next_due, INTERVAL_DAYS};
pub use status::{classify, MASTERY_THRESHOLD};

use crate::types::{Problem, Review};
use chrono::{DateTime, Utc};

/// Apply one review outcome to a problem and reschedule it.
///
/// A failure discards the whole history and replaces it with the single
/// failing review, sending the problem back to the shortest interval. A
/// success appends to the existing history. Either way `next_due` is
/// recomputed from the full updated history.
///
/// There is no mastery guard: outcomes recorded against a mastered problem
/// are accepted and rescheduled. Mastery is recomputed from history on every
/// classification, so a failure after mastery un-masters the problem.
pub fn record(mut problem: Problem, success: bool, at: DateTime<Utc>) -> Problem {
    if success {
        problem.reviews.push(Review::new(at, true));
    } else {
        problem.reviews = vec![Review::new(at, false)];
    }
    // History is non-empty after either branch.
    problem.next_due = Some(next_due(&problem.reviews).expect("history has an entry"));
    problem
}
