//! Problem store capability.
//!
//! Persistence is injected: the catalog works against [`ProblemStore`] and
//! never touches a concrete storage technology. Implementations choose the
//! representation (flat file, browser storage, remote table) and own any
//! I/O failure handling beyond the [`StoreError`] surface.

use std::collections::BTreeMap;

use review_core::Problem;
use thiserror::Error;

/// Errors from a problem store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("problem {id} not found")]
    NotFound { id: i64 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Keyed persistence for problems.
///
/// Implementations must serialize writes per problem id: a `save` result is
/// never persisted out of order relative to an earlier `save` for the same
/// id.
pub trait ProblemStore {
    /// Fetch a problem by id.
    fn load(&self, id: i64) -> Result<Option<Problem>, StoreError>;

    /// Insert or replace a problem.
    fn save(&mut self, problem: &Problem) -> Result<(), StoreError>;

    /// Remove a problem.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no problem has this id.
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;

    /// All stored problems in ascending id order.
    fn load_all(&self) -> Result<Vec<Problem>, StoreError>;

    /// Remove every stored problem.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory problem store.
///
/// The reference implementation; never fails. Used directly in tests and as
/// the backing store for callers that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    problems: BTreeMap<i64, Problem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl ProblemStore for MemoryStore {
    fn load(&self, id: i64) -> Result<Option<Problem>, StoreError> {
        Ok(self.problems.get(&id).cloned())
    }

    fn save(&mut self, problem: &Problem) -> Result<(), StoreError> {
        self.problems.insert(problem.id, problem.clone());
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.problems
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    fn load_all(&self) -> Result<Vec<Problem>, StoreError> {
        Ok(self.problems.values().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.problems.clear();
        Ok(())
    }
}
