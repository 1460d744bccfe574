//! The task store: the single owner of the task collection.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::task::{
    domain::{
        Task, TaskId, display_order, first_repeated_id, insert_task, remove_task, renumber,
        search_by_name, toggle_task_completed, update_task,
    },
    ports::{SubscriptionId, TaskObserver, TaskSnapshotStore},
};

/// Holds the authoritative task collection and applies transitions to it.
///
/// Every transition computes the new collection with the ordering
/// functions, commits it, saves it through the snapshot port, and then
/// notifies observers with the committed collection. Transitions take
/// `&mut self`, so observers cannot re-enter the store.
///
/// Saving is best effort: a failed save is logged and the in-memory state
/// stays authoritative for the session.
pub struct TaskStore<S>
where
    S: TaskSnapshotStore,
{
    tasks: Vec<Task>,
    snapshots: Arc<S>,
    observers: Vec<(SubscriptionId, Box<dyn TaskObserver>)>,
    next_subscription: u64,
}

impl<S> TaskStore<S>
where
    S: TaskSnapshotStore,
{
    /// Opens the store, loading the saved collection once.
    ///
    /// A load failure is logged and the store starts empty.
    #[must_use]
    pub fn open(snapshots: Arc<S>) -> Self {
        let tasks = snapshots.load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load task snapshot, starting empty");
            Vec::new()
        });
        debug!(count = tasks.len(), "task store opened");
        Self {
            tasks,
            snapshots,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the committed collection in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the collection in display order.
    #[must_use]
    pub fn display(&self) -> Vec<Task> {
        display_order(&self.tasks)
    }

    /// Returns the display-ordered tasks whose name starts with `term`.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Task> {
        search_by_name(&self.display(), term)
    }

    /// Registers an observer called after every applied transition.
    pub fn subscribe(&mut self, observer: impl TaskObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        let boxed: Box<dyn TaskObserver> = Box::new(observer);
        self.observers.push((id, boxed));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    /// Inserts a new task at its requested rank.
    ///
    /// A task whose identifier is already present is ignored.
    pub fn add_task(&mut self, task: Task) {
        if self.get(task.id()).is_some() {
            warn!(task_id = %task.id(), "ignoring add of a task id already present");
            return;
        }
        let next = insert_task(&self.tasks, task);
        self.commit(next);
    }

    /// Removes the task with the given identifier, leaving its rank vacant.
    pub fn remove_task(&mut self, id: &TaskId) {
        if !self.contains(id, "remove") {
            return;
        }
        let next = remove_task(&self.tasks, id);
        self.commit(next);
    }

    /// Replaces a task with its edited version, moving it if its rank
    /// changed.
    pub fn update_task(&mut self, task: Task) {
        if !self.contains(task.id(), "update") {
            return;
        }
        let next = update_task(&self.tasks, task);
        self.commit(next);
    }

    /// Flips the completion flag of the given task.
    pub fn toggle_task_completed(&mut self, id: &TaskId) {
        if !self.contains(id, "toggle") {
            return;
        }
        let next = toggle_task_completed(&self.tasks, id);
        self.commit(next);
    }

    /// Replaces the collection with `sequence`, ranked by position.
    ///
    /// This is the terminal event of a drag-and-drop gesture: the caller
    /// supplies the full ordering. A sequence repeating an identifier is
    /// ignored.
    pub fn reorder_tasks(&mut self, sequence: Vec<Task>) {
        if let Some(duplicate) = first_repeated_id(&sequence) {
            warn!(task_id = %duplicate, "ignoring reorder with a repeated task id");
            return;
        }
        self.commit(renumber(sequence));
    }

    fn contains(&self, id: &TaskId, action: &str) -> bool {
        let found = self.get(id).is_some();
        if !found {
            debug!(task_id = %id, action, "task not found, state unchanged");
        }
        found
    }

    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = next;
        if let Err(err) = self.snapshots.save(&self.tasks) {
            warn!(error = %err, "failed to save task snapshot");
        }
        let Self {
            tasks, observers, ..
        } = self;
        for (_, observer) in observers.iter_mut() {
            observer.tasks_changed(tasks);
        }
    }
}

impl<S> fmt::Debug for TaskStore<S>
where
    S: TaskSnapshotStore,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
