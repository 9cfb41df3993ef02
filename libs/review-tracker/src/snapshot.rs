//! JSON snapshot backup of the problem catalog.
//!
//! Pure data transforms. The caller owns the transport: writing the exported
//! string to a file, reading pasted text back in, and deciding when to apply
//! a restored snapshot.

use std::collections::HashSet;

use review_core::Problem;
use thiserror::Error;

/// Errors from snapshot parsing and validation.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate problem id {id} in snapshot")]
    DuplicateId { id: i64 },

    #[error("problem {id} has reviews but no due date")]
    MissingDueDate { id: i64 },

    #[error("problem {id} has a due date but no reviews")]
    StrayDueDate { id: i64 },
}

/// Serialize problems to pretty-printed JSON.
pub fn export(problems: &[Problem]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(problems)?)
}

/// Parse a snapshot and validate it before anything is applied.
///
/// Rejects duplicate ids and any problem that breaks the due-date rule: a
/// due date exists exactly when the review history is non-empty.
pub fn import(json: &str) -> Result<Vec<Problem>, SnapshotError> {
    let problems: Vec<Problem> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for problem in &problems {
        if !seen.insert(problem.id) {
            return Err(SnapshotError::DuplicateId { id: problem.id });
        }
        match (problem.reviews.is_empty(), problem.next_due) {
            (false, None) => return Err(SnapshotError::MissingDueDate { id: problem.id }),
            (true, Some(_)) => return Err(SnapshotError::StrayDueDate { id: problem.id }),
            _ => {}
        }
    }

    tracing::info!("Validated snapshot with {} problems", problems.len());
    Ok(problems)
}
