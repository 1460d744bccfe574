//! Action surface used by the presentation layer.
//!
//! `TaskBoard` validates form input, mints identifiers, and turns
//! drag-and-drop gestures into full reorderings before handing them to the
//! [`TaskStore`].

use std::sync::Arc;
use thiserror::Error;

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, move_within},
    error::ValidationError,
    ports::{SubscriptionId, TaskObserver, TaskSnapshotStore, TaskValidator},
    services::TaskStore,
};

/// Errors surfaced by board actions.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The draft failed input validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The draft could not be turned into a task.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for board actions.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task list actions with validation in front of the store.
pub struct TaskBoard<S, V>
where
    S: TaskSnapshotStore,
    V: TaskValidator,
{
    store: TaskStore<S>,
    validator: Arc<V>,
}

impl<S, V> TaskBoard<S, V>
where
    S: TaskSnapshotStore,
    V: TaskValidator,
{
    /// Opens a board over the given snapshot store.
    #[must_use]
    pub fn open(snapshots: Arc<S>, validator: Arc<V>) -> Self {
        Self {
            store: TaskStore::open(snapshots),
            validator,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Registers an observer on the underlying store.
    pub fn subscribe(&mut self, observer: impl TaskObserver + 'static) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    /// Validates a draft and adds it as a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Validation`] when the draft is rejected.
    pub fn create_task(&mut self, draft: TaskDraft) -> TaskBoardResult<Task> {
        self.validator.validate(&draft)?;
        let task = Task::create(draft)?;
        self.store.add_task(task.clone());
        Ok(task)
    }

    /// Validates a draft and applies it to an existing task.
    ///
    /// Returns `Ok(None)` when no task has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Validation`] when the draft is rejected.
    pub fn edit_task(&mut self, id: &TaskId, draft: TaskDraft) -> TaskBoardResult<Option<Task>> {
        self.validator.validate(&draft)?;
        let Some(existing) = self.store.get(id) else {
            return Ok(None);
        };
        let revised = existing.revise(draft)?;
        self.store.update_task(revised.clone());
        Ok(Some(revised))
    }

    /// Deletes a task.
    pub fn delete_task(&mut self, id: &TaskId) {
        self.store.remove_task(id);
    }

    /// Toggles a task's completion flag.
    pub fn toggle_task(&mut self, id: &TaskId) {
        self.store.toggle_task_completed(id);
    }

    /// Applies a finished drag within the displayed, searched list.
    ///
    /// Indices refer to positions in `self.store().search(search_term)`.
    /// Tasks hidden by the search keep their display slots; the visible
    /// tasks are rearranged among the remaining slots and the full list is
    /// renumbered. A task dropped across the boundary between incomplete
    /// and completed tasks lands at the edge of its own group. Returns
    /// `false` when the drop landed outside the list.
    pub fn drop_task(&mut self, source: usize, destination: usize, search_term: &str) -> bool {
        let visible = self.store.search(search_term);
        let Some(landing) = destination_within_group(&visible, source, destination) else {
            return false;
        };
        let Some(rearranged) = move_within(&visible, source, landing) else {
            return false;
        };
        let mut rearranged_iter = rearranged.into_iter();
        let sequence: Vec<Task> = self
            .store
            .display()
            .into_iter()
            .map(|task| {
                let is_visible = visible.iter().any(|shown| shown.id() == task.id());
                if is_visible {
                    rearranged_iter.next().unwrap_or(task)
                } else {
                    task
                }
            })
            .collect();
        self.store.reorder_tasks(sequence);
        true
    }
}

/// Clamps `destination` so the task at `source` stays in its completion
/// group of the display-ordered `visible` list.
fn destination_within_group(visible: &[Task], source: usize, destination: usize) -> Option<usize> {
    if destination >= visible.len() {
        return None;
    }
    let moved = visible.get(source)?;
    let open_count = visible.iter().filter(|task| !task.is_completed()).count();
    let clamped = if moved.is_completed() {
        destination.max(open_count)
    } else {
        destination.min(open_count.saturating_sub(1))
    };
    Some(clamped)
}
