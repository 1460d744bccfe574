//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemorySnapshotStore,
    domain::Task,
    services::{TaskBoard, TaskStore},
    validation::DefaultTaskValidator,
};

/// Board type used across integration tests.
pub type TestBoard = TaskBoard<InMemorySnapshotStore, DefaultTaskValidator>;

/// Provides a fresh, shared in-memory snapshot store.
#[fixture]
pub fn snapshots() -> Arc<InMemorySnapshotStore> {
    Arc::new(InMemorySnapshotStore::new())
}

/// Opens a board with the default validator over `snapshots`.
#[must_use]
pub fn open_board(snapshots: &Arc<InMemorySnapshotStore>) -> TestBoard {
    TaskBoard::open(Arc::clone(snapshots), Arc::new(DefaultTaskValidator::new()))
}

/// Opens a bare store over `snapshots`.
#[must_use]
pub fn open_store(snapshots: &Arc<InMemorySnapshotStore>) -> TaskStore<InMemorySnapshotStore> {
    TaskStore::open(Arc::clone(snapshots))
}

/// Returns the names of `tasks` in order.
#[must_use]
pub fn names(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.name().to_owned()).collect()
}

/// Returns the sorted ranks of incomplete tasks.
#[must_use]
pub fn open_ranks(tasks: &[Task]) -> Vec<u32> {
    let mut ranks: Vec<u32> = tasks
        .iter()
        .filter(|task| !task.is_completed())
        .map(|task| task.order().value())
        .collect();
    ranks.sort_unstable();
    ranks
}
