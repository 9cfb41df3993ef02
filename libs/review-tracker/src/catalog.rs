//! Problem catalog service.
//!
//! The write path and the query surface over an injected [`ProblemStore`]:
//! registering and removing problems, recording review outcomes through the
//! engine, and the status/topic views the tracker UI filters on.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use review_core::{
    classify, record, Difficulty, Problem, Status, StatusCounts, Topic,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{ProblemStore, StoreError};

/// Catalog error types.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("problem {id} already exists")]
    DuplicateId { id: i64 },

    #[error("problem {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields for registering a new problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProblem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub topic: Topic,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Display status of a problem at a caller-supplied instant.
pub fn status_of(problem: &Problem, now: DateTime<Utc>) -> Status {
    classify(&problem.reviews, problem.next_due, now)
}

/// Catalog of tracked problems over an injected store.
pub struct Catalog<S: ProblemStore> {
    store: S,
}

impl<S: ProblemStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new problem with an empty review history.
    ///
    /// # Errors
    /// [`CatalogError::DuplicateId`] if a problem with this id already
    /// exists.
    pub fn add(&mut self, new: NewProblem, created_at: DateTime<Utc>) -> Result<Problem, CatalogError> {
        if self.store.load(new.id)?.is_some() {
            return Err(CatalogError::DuplicateId { id: new.id });
        }
        let problem = Problem::new(
            new.id,
            new.name,
            new.topic,
            new.difficulty,
            new.notes,
            created_at,
        );
        self.store.save(&problem)?;
        tracing::info!("Added problem #{}: {}", problem.id, problem.name);
        Ok(problem)
    }

    /// Remove a problem from the catalog.
    pub fn remove(&mut self, id: i64) -> Result<(), CatalogError> {
        match self.store.delete(id) {
            Ok(()) => {
                tracing::info!("Removed problem #{}", id);
                Ok(())
            }
            Err(StoreError::NotFound { id }) => Err(CatalogError::NotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a problem by id.
    pub fn get(&self, id: i64) -> Result<Option<Problem>, CatalogError> {
        Ok(self.store.load(id)?)
    }

    /// All problems in ascending id order.
    pub fn list(&self) -> Result<Vec<Problem>, CatalogError> {
        Ok(self.store.load_all()?)
    }

    /// Record one review outcome against a problem and persist the result.
    ///
    /// This is the single write path for outcomes: it loads the problem,
    /// applies the engine's recorder, and saves the rescheduled problem.
    pub fn record_review(
        &mut self,
        id: i64,
        success: bool,
        at: DateTime<Utc>,
    ) -> Result<Problem, CatalogError> {
        let problem = self.store.load(id)?.ok_or(CatalogError::NotFound { id })?;
        let updated = record(problem, success, at);
        self.store.save(&updated)?;
        tracing::info!(
            "Recorded {} review for problem #{}",
            if success { "successful" } else { "failed" },
            id
        );
        Ok(updated)
    }

    /// Problems currently in the given status.
    pub fn problems_with_status(
        &self,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<Vec<Problem>, CatalogError> {
        let mut problems = self.list()?;
        problems.retain(|p| status_of(p, now) == status);
        Ok(problems)
    }

    /// Problems filed under the given topic.
    pub fn problems_by_topic(&self, topic: Topic) -> Result<Vec<Problem>, CatalogError> {
        let mut problems = self.list()?;
        problems.retain(|p| p.topic == topic);
        Ok(problems)
    }

    /// Problems due for review today.
    pub fn due_today(&self, now: DateTime<Utc>) -> Result<Vec<Problem>, CatalogError> {
        self.problems_with_status(Status::DueForReview, now)
    }

    /// Problem count per topic, including topics with no problems.
    pub fn topic_counts(&self) -> Result<BTreeMap<Topic, usize>, CatalogError> {
        let mut counts: BTreeMap<Topic, usize> = Topic::ALL.iter().map(|t| (*t, 0)).collect();
        for problem in self.list()? {
            *counts.entry(problem.topic).or_default() += 1;
        }
        Ok(counts)
    }

    /// Per-status totals across the whole catalog.
    pub fn stats(&self, now: DateTime<Utc>) -> Result<StatusCounts, CatalogError> {
        let mut counts = StatusCounts::default();
        for problem in self.list()? {
            counts.total += 1;
            match status_of(&problem, now) {
                Status::Mastered => counts.mastered += 1,
                Status::DueForReview => counts.due_for_review += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::NotStarted => counts.not_started += 1,
            }
        }
        Ok(counts)
    }

    /// Remove every problem.
    pub fn clear(&mut self) -> Result<(), CatalogError> {
        self.store.clear()?;
        tracing::info!("Cleared all problems");
        Ok(())
    }

    /// Replace the catalog contents with a snapshot.
    ///
    /// Callers validate the snapshot first (see [`crate::snapshot::import`]).
    pub fn restore(&mut self, problems: Vec<Problem>) -> Result<(), CatalogError> {
        self.store.clear()?;
        let count = problems.len();
        for problem in &problems {
            self.store.save(problem)?;
        }
        tracing::info!("Restored {} problems from snapshot", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn new_problem(id: i64, topic: Topic) -> NewProblem {
        NewProblem {
            id,
            name: format!("Problem {id}"),
            topic,
            difficulty: Difficulty::Medium,
            notes: None,
        }
    }

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut catalog = catalog();
        catalog.add(new_problem(1, Topic::Array), dt(2024, 1, 1)).unwrap();

        let err = catalog
            .add(new_problem(1, Topic::Graph), dt(2024, 1, 2))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn new_problems_start_unscheduled() {
        let mut catalog = catalog();
        let problem = catalog.add(new_problem(1, Topic::Array), dt(2024, 1, 1)).unwrap();

        assert!(problem.reviews.is_empty());
        assert_eq!(problem.next_due, None);
        assert_eq!(status_of(&problem, dt(2024, 1, 1)), Status::NotStarted);
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut catalog = catalog();
        let err = catalog.remove(42).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 42 }));
    }

    #[test]
    fn record_review_persists_the_updated_problem() {
        let mut catalog = catalog();
        catalog.add(new_problem(1, Topic::Array), dt(2024, 1, 1)).unwrap();

        let at = dt(2024, 1, 5);
        let updated = catalog.record_review(1, true, at).unwrap();
        assert_eq!(updated.success_count(), 1);

        let stored = catalog.get(1).unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.next_due, Some(at + Duration::days(3)));
    }

    #[test]
    fn record_review_for_unknown_id_is_not_found() {
        let mut catalog = catalog();
        let err = catalog.record_review(9, true, dt(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { id: 9 }));
    }

    #[test]
    fn stats_counts_every_status() {
        let mut catalog = catalog();
        let created = dt(2024, 1, 1);
        for id in 1..=4 {
            catalog.add(new_problem(id, Topic::Array), created).unwrap();
        }

        // #1 stays NotStarted. #2 becomes mastered.
        for day in 0..4 {
            catalog
                .record_review(2, true, created + Duration::days(day))
                .unwrap();
        }
        // #3 failed yesterday, so it is due today.
        catalog
            .record_review(3, false, dt(2024, 2, 1) - Duration::days(1))
            .unwrap();
        // #4 succeeded today, due in three days.
        catalog.record_review(4, true, dt(2024, 2, 1)).unwrap();

        let stats = catalog.stats(dt(2024, 2, 1)).unwrap();
        assert_eq!(
            stats,
            StatusCounts {
                total: 4,
                mastered: 1,
                due_for_review: 1,
                in_progress: 1,
                not_started: 1,
            }
        );
    }

    #[test]
    fn due_today_lists_only_due_problems() {
        let mut catalog = catalog();
        let created = dt(2024, 1, 1);
        catalog.add(new_problem(1, Topic::Array), created).unwrap();
        catalog.add(new_problem(2, Topic::Graph), created).unwrap();

        catalog.record_review(1, false, dt(2024, 1, 10)).unwrap();
        catalog.record_review(2, true, dt(2024, 1, 11)).unwrap();

        let due = catalog.due_today(dt(2024, 1, 11)).unwrap();
        let ids: Vec<i64> = due.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn topic_counts_include_empty_topics() {
        let mut catalog = catalog();
        let created = dt(2024, 1, 1);
        catalog.add(new_problem(1, Topic::Array), created).unwrap();
        catalog.add(new_problem(2, Topic::Array), created).unwrap();
        catalog.add(new_problem(3, Topic::Greedy), created).unwrap();

        let counts = catalog.topic_counts().unwrap();
        assert_eq!(counts.len(), Topic::ALL.len());
        assert_eq!(counts[&Topic::Array], 2);
        assert_eq!(counts[&Topic::Greedy], 1);
        assert_eq!(counts[&Topic::Graph], 0);
    }

    #[test]
    fn problems_by_topic_filters() {
        let mut catalog = catalog();
        let created = dt(2024, 1, 1);
        catalog.add(new_problem(1, Topic::Array), created).unwrap();
        catalog.add(new_problem(2, Topic::Graph), created).unwrap();

        let graphs = catalog.problems_by_topic(Topic::Graph).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].id, 2);
    }

    #[test]
    fn clear_then_list_is_empty() {
        let mut catalog = catalog();
        catalog.add(new_problem(1, Topic::Array), dt(2024, 1, 1)).unwrap();
        catalog.clear().unwrap();
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn restore_replaces_existing_contents() {
        let mut catalog = catalog();
        catalog.add(new_problem(1, Topic::Array), dt(2024, 1, 1)).unwrap();

        let replacement = Problem::new(
            5,
            "Course Schedule",
            Topic::Graph,
            Difficulty::Medium,
            None,
            dt(2024, 2, 1),
        );
        catalog.restore(vec![replacement.clone()]).unwrap();

        assert_eq!(catalog.list().unwrap(), vec![replacement]);
    }
}
