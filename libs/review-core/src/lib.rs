//! Core review-scheduling library for the practice-problem tracker.
//!
//! Provides:
//! - Interval-table scheduler (1, 3, 7, 14, 30 days by success count)
//! - Mastery status classifier (not started / in progress / due / mastered)
//! - Review recorder, the single mutation entry point for a problem
//! - Shared types (Problem, Review, Status, Topic, Difficulty)
//!
//! Everything here is pure: no I/O, no clocks, no storage. Persistence and
//! presentation live with the caller.

pub mod error;
pub mod scheduling;
pub mod types;

pub use error::{EngineError, Result};
pub use scheduling::{classify, next_due, record, INTERVAL_DAYS, MASTERY_THRESHOLD};
pub use types::{Difficulty, Problem, Review, Status, StatusCounts, Topic};
