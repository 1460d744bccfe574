//! Error types for task domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The display rank is not a positive integer.
    #[error("invalid task order {0}, expected a positive integer")]
    InvalidOrder(u32),
}
