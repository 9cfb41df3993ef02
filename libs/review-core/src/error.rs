//! Error types for review-core.

use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors from the scheduling engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot compute a due date for an empty review history")]
    EmptyHistory,
}
