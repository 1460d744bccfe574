//! When steps for task ordering BDD scenarios.

use std::sync::Arc;

use super::world::{TaskOrderingWorld, open_task, task_id};
use eyre::eyre;
use rstest_bdd_macros::when;
use taskboard::task::{domain::move_within, services::TaskStore};

#[when(r#"an open task "{id}" is added at order {order:u32}"#)]
fn task_is_added(world: &mut TaskOrderingWorld, id: String, order: u32) -> Result<(), eyre::Report> {
    let task = open_task(&id, order)?;
    world.store.add_task(task);
    Ok(())
}

#[when(r#"task "{id}" is toggled"#)]
fn task_is_toggled(world: &mut TaskOrderingWorld, id: String) -> Result<(), eyre::Report> {
    world.store.toggle_task_completed(&task_id(&id)?);
    Ok(())
}

#[when(r#"task "{id}" is removed"#)]
fn task_is_removed(world: &mut TaskOrderingWorld, id: String) -> Result<(), eyre::Report> {
    world.store.remove_task(&task_id(&id)?);
    Ok(())
}

#[when("the task at position {source:usize} is dropped at position {destination:usize}")]
fn task_is_dropped(
    world: &mut TaskOrderingWorld,
    source: usize,
    destination: usize,
) -> Result<(), eyre::Report> {
    let displayed = world.store.display();
    let reordered = move_within(&displayed, source, destination)
        .ok_or_else(|| eyre!("drop positions {source} -> {destination} out of range"))?;
    world.store.reorder_tasks(reordered);
    Ok(())
}

#[when("the store is reopened")]
fn store_is_reopened(world: &mut TaskOrderingWorld) {
    world.store = TaskStore::open(Arc::clone(&world.snapshots));
}
