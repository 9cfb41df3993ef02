//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, TimeZone, Utc};
use review_core::{Difficulty, Topic};
use review_tracker::{Catalog, MemoryStore, NewProblem};

/// Noon UTC on the given day.
pub fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// A catalog backed by a fresh in-memory store.
pub fn catalog() -> Catalog<MemoryStore> {
    Catalog::new(MemoryStore::new())
}

/// Registration fields for a problem with the given id.
pub fn new_problem(id: i64, name: &str, topic: Topic) -> NewProblem {
    NewProblem {
        id,
        name: name.to_string(),
        topic,
        difficulty: Difficulty::Medium,
        notes: None,
    }
}
