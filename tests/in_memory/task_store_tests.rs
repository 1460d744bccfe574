//! In-memory integration tests for task store transitions.

use std::sync::Arc;

use super::helpers::{names, open_ranks, open_store, snapshots};
use rstest::rstest;
use taskboard::task::{
    adapters::{codec::decode_tasks, memory::InMemorySnapshotStore},
    domain::{Task, TaskDraft},
};

fn draft_task(name: &str, order: u32) -> Task {
    Task::create(TaskDraft::new(name, format!("{name} needs doing this week")).with_order(order))
        .expect("valid draft")
}

#[rstest]
fn inserts_at_every_rank_stay_contiguous(snapshots: Arc<InMemorySnapshotStore>) {
    let mut store = open_store(&snapshots);

    store.add_task(draft_task("first", 1));
    store.add_task(draft_task("last", 2));
    store.add_task(draft_task("middle", 2));
    store.add_task(draft_task("top", 1));

    assert_eq!(
        names(&store.display()),
        vec!["top", "first", "middle", "last"]
    );
    assert_eq!(open_ranks(store.tasks()), vec![1, 2, 3, 4]);
}

#[rstest]
fn every_transition_is_visible_to_a_reopened_store(snapshots: Arc<InMemorySnapshotStore>) {
    let mut store = open_store(&snapshots);
    let kept = draft_task("kept", 1);
    let dropped = draft_task("dropped", 2);
    store.add_task(kept.clone());
    store.add_task(dropped.clone());
    store.toggle_task_completed(kept.id());
    store.remove_task(dropped.id());

    let reopened = open_store(&snapshots);

    assert_eq!(reopened.tasks(), store.tasks());
    assert!(reopened.get(kept.id()).is_some_and(Task::is_completed));
    assert!(reopened.get(dropped.id()).is_none());
}

#[rstest]
fn saved_blob_is_the_committed_collection(snapshots: Arc<InMemorySnapshotStore>) {
    let mut store = open_store(&snapshots);
    store.add_task(draft_task("alpha", 1));
    store.add_task(draft_task("beta", 1));

    let blob = snapshots
        .raw_blob()
        .expect("readable storage")
        .expect("blob saved");

    assert_eq!(decode_tasks(&blob).expect("decodable blob"), store.tasks());
}

#[rstest]
fn gap_after_remove_is_closed_by_next_reorder(snapshots: Arc<InMemorySnapshotStore>) {
    let mut store = open_store(&snapshots);
    let doomed = draft_task("two", 2);
    store.add_task(draft_task("one", 1));
    store.add_task(doomed.clone());
    store.add_task(draft_task("three", 3));
    store.remove_task(doomed.id());
    assert_eq!(open_ranks(store.tasks()), vec![1, 3]);

    let display = store.display();
    store.reorder_tasks(display);

    assert_eq!(open_ranks(store.tasks()), vec![1, 2]);
    assert_eq!(names(&store.display()), vec!["one", "three"]);
}
