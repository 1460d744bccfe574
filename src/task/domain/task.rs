//! Task record and the form payload it is created from.

use super::{TaskDomainError, TaskId, TaskOrder};
use serde::{Deserialize, Serialize};

/// A single entry on the task list.
///
/// Field order matches the persisted record layout
/// `{id, name, description, completed, order}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
    completed: bool,
    order: TaskOrder,
}

/// Raw form values for creating or editing a task.
///
/// Drafts are unvalidated; run them through a
/// [`TaskValidator`](crate::task::ports::TaskValidator) before building a
/// [`Task`] from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short task name.
    pub name: String,
    /// Longer free-text description.
    pub description: String,
    /// Whether the task starts out completed.
    pub completed: bool,
    /// Requested display rank.
    pub order: u32,
}

impl TaskDraft {
    /// Creates an incomplete draft requesting the top rank.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            completed: false,
            order: 1,
        }
    }

    /// Sets the requested display rank.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            completed: task.completed,
            order: task.order.value(),
        }
    }
}

/// Parameter object for reconstructing a task from a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted display rank.
    pub order: TaskOrder,
}

impl Task {
    /// Creates a new task with a freshly minted identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidOrder`] when the draft requests
    /// rank zero.
    pub fn create(draft: TaskDraft) -> Result<Self, TaskDomainError> {
        Self::with_id(TaskId::new(), draft)
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            completed: data.completed,
            order: data.order,
        }
    }

    /// Returns the edited version of this task, keeping its identifier.
    ///
    /// Every field other than the identifier is taken from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidOrder`] when the draft requests
    /// rank zero.
    pub fn revise(&self, draft: TaskDraft) -> Result<Self, TaskDomainError> {
        Self::with_id(self.id.clone(), draft)
    }

    fn with_id(id: TaskId, draft: TaskDraft) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            completed: draft.completed,
            order: TaskOrder::new(draft.order)?,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the display rank.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    pub(crate) const fn with_order(mut self, order: TaskOrder) -> Self {
        self.order = order;
        self
    }

    pub(crate) const fn toggled(mut self) -> Self {
        self.completed = !self.completed;
        self
    }
}
