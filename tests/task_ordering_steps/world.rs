//! Shared world state for task ordering BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemorySnapshotStore,
    domain::{PersistedTaskData, Task, TaskId, TaskOrder},
    services::TaskStore,
};

/// Scenario world for task ordering behaviour tests.
pub struct TaskOrderingWorld {
    pub snapshots: Arc<InMemorySnapshotStore>,
    pub store: TaskStore<InMemorySnapshotStore>,
}

impl TaskOrderingWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let store = TaskStore::open(Arc::clone(&snapshots));
        Self { snapshots, store }
    }
}

impl Default for TaskOrderingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskOrderingWorld {
    TaskOrderingWorld::default()
}

/// Builds an incomplete task with a readable identifier.
pub fn open_task(id: &str, order: u32) -> Result<Task, eyre::Report> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_string(id)?,
        name: format!("Task {id}"),
        description: format!("Scenario task {id} description"),
        completed: false,
        order: TaskOrder::new(order)?,
    }))
}

/// Parses a task identifier from scenario text.
pub fn task_id(id: &str) -> Result<TaskId, eyre::Report> {
    Ok(TaskId::from_string(id)?)
}
