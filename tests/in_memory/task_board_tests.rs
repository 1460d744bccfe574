//! In-memory integration tests for board flows.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::helpers::{names, open_board, snapshots};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemorySnapshotStore,
    domain::{Task, TaskDraft},
    services::TaskBoardError,
};

#[rstest]
fn create_edit_complete_and_search(snapshots: Arc<InMemorySnapshotStore>) -> Result<(), eyre::Report> {
    let mut board = open_board(&snapshots);
    let changes = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&changes);
    board.subscribe(move |_: &[Task]| counter.set(counter.get() + 1));

    let groceries = board.create_task(TaskDraft::new("Groceries", "Milk, eggs, flour and lemons"))?;
    let garden = board
        .create_task(TaskDraft::new("Garden", "Mow the lawn and water the roses").with_order(2))?;
    board.create_task(TaskDraft::new("Laundry", "Wash and fold all of the towels").with_order(3))?;
    board.edit_task(
        groceries.id(),
        TaskDraft::new("Groceries", "Milk, eggs, flour, lemons and rice").with_order(2),
    )?;
    board.toggle_task(garden.id());

    assert_eq!(
        names(&board.store().display()),
        vec!["Groceries", "Laundry", "Garden"]
    );
    assert_eq!(names(&board.store().search("g")), vec!["Groceries", "Garden"]);
    assert_eq!(changes.get(), 5);
    Ok(())
}

#[rstest]
fn rejected_drafts_leave_storage_untouched(snapshots: Arc<InMemorySnapshotStore>) {
    let mut board = open_board(&snapshots);

    let result = board.create_task(TaskDraft::new("Gym", "Too short"));

    assert!(matches!(result, Err(TaskBoardError::Validation(_))));
    assert_eq!(snapshots.raw_blob().expect("readable storage"), None);
}
