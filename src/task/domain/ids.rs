//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a task record.
///
/// Freshly minted identifiers are random UUID strings, but any non-empty
/// string read back from storage is accepted verbatim.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskId;
///
/// let id = TaskId::new();
/// assert!(!id.as_str().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a task identifier from an existing string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is empty or
    /// whitespace only.
    pub fn from_string(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Note: each call mints a fresh random identifier. Prefer
/// [`TaskId::new`] where the intent should be explicit.
impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display rank of a task, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TaskOrder(u32);

impl TaskOrder {
    /// The top rank.
    pub const FIRST: Self = Self(1);

    /// Creates a validated rank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidOrder`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, TaskDomainError> {
        if value == 0 {
            return Err(TaskDomainError::InvalidOrder(value));
        }
        Ok(Self(value))
    }

    /// Returns the rank for a zero-based sequence position.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        let rank = u32::try_from(position).map_or(u32::MAX, |value| value.saturating_add(1));
        Self(rank)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the next rank down the list.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the next rank up the list, stopping at [`TaskOrder::FIRST`].
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.0 <= 1 {
            return Self::FIRST;
        }
        Self(self.0 - 1)
    }
}

impl Default for TaskOrder {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for TaskOrder {
    type Error = TaskDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskOrder> for u32 {
    fn from(value: TaskOrder) -> Self {
        value.0
    }
}

impl fmt::Display for TaskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
