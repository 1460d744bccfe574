//! Order reconciliation for the task list.
//!
//! Every function here is pure: it borrows the current collection and
//! returns a new one. Among incomplete tasks the `order` values stay a
//! contiguous `1..N` run across [`insert_task`], [`update_task`] and
//! [`renumber`]. [`remove_task`] deliberately leaves the vacated rank empty
//! and [`toggle_task_completed`] never touches any rank; both gaps are
//! tolerated by the other operations.

use std::collections::HashSet;

use super::{Task, TaskId, TaskOrder};

/// Inserts `new_task` at its requested rank.
///
/// Every existing task ranked at or below the requested slot moves down by
/// one. The result is sorted by ascending rank.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::{Task, TaskDraft, insert_task};
///
/// let first = Task::create(TaskDraft::new("Write", "Draft the release notes")).expect("valid");
/// let second = Task::create(TaskDraft::new("Ship", "Publish the release build")).expect("valid");
/// let tasks = insert_task(&[first.clone()], second.clone());
///
/// assert_eq!(tasks.first().map(Task::id), Some(second.id()));
/// assert_eq!(tasks.get(1).map(|task| task.order().value()), Some(2));
/// ```
#[must_use]
pub fn insert_task(tasks: &[Task], new_task: Task) -> Vec<Task> {
    let slot = new_task.order();
    let mut updated: Vec<Task> = tasks
        .iter()
        .cloned()
        .map(|task| {
            if task.order() >= slot {
                let next = task.order().next();
                task.with_order(next)
            } else {
                task
            }
        })
        .collect();
    updated.push(new_task);
    sort_by_order(&mut updated);
    updated
}

/// Removes the task with the given identifier.
///
/// Remaining ranks are left as they are, so a gap may appear.
#[must_use]
pub fn remove_task(tasks: &[Task], target: &TaskId) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.id() != target)
        .cloned()
        .collect()
}

/// Replaces a task with its edited version.
///
/// Unknown identifiers leave the collection unchanged. When the rank is
/// unchanged the task is replaced in place. When the rank moves, every task
/// between the old and new rank shifts one step towards the vacated slot
/// and the result is sorted by ascending rank.
#[must_use]
pub fn update_task(tasks: &[Task], updated_task: Task) -> Vec<Task> {
    let Some(existing) = tasks.iter().find(|task| task.id() == updated_task.id()) else {
        return tasks.to_vec();
    };

    let from = existing.order();
    let to = updated_task.order();
    if from == to {
        return tasks
            .iter()
            .map(|task| {
                if task.id() == updated_task.id() {
                    updated_task.clone()
                } else {
                    task.clone()
                }
            })
            .collect();
    }

    let mut updated: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id() != updated_task.id())
        .cloned()
        .map(|task| shift_for_move(task, from, to))
        .collect();
    updated.push(updated_task);
    sort_by_order(&mut updated);
    updated
}

fn shift_for_move(task: Task, from: TaskOrder, to: TaskOrder) -> Task {
    let rank = task.order();
    if from < to && rank > from && rank <= to {
        let previous = rank.previous();
        return task.with_order(previous);
    }
    if to < from && rank < from && rank >= to {
        let next = rank.next();
        return task.with_order(next);
    }
    task
}

/// Flips the completion flag of the task with the given identifier.
///
/// No rank changes, including the toggled task's own.
#[must_use]
pub fn toggle_task_completed(tasks: &[Task], target: &TaskId) -> Vec<Task> {
    tasks
        .iter()
        .cloned()
        .map(|task| {
            if task.id() == target {
                task.toggled()
            } else {
                task
            }
        })
        .collect()
}

/// Assigns each task the rank matching its position in `sequence`.
#[must_use]
pub fn renumber(sequence: Vec<Task>) -> Vec<Task> {
    sequence
        .into_iter()
        .enumerate()
        .map(|(position, task)| task.with_order(TaskOrder::from_position(position)))
        .collect()
}

/// Applies a drag-and-drop move to a displayed sequence.
///
/// The task at `source` is taken out and reinserted at `destination`, then
/// the whole sequence is renumbered from 1. Returns `None` when either
/// index falls outside the sequence, which is how a drop outside the list
/// is reported.
#[must_use]
pub fn move_within(displayed: &[Task], source: usize, destination: usize) -> Option<Vec<Task>> {
    if source >= displayed.len() || destination >= displayed.len() {
        return None;
    }
    let mut reordered = displayed.to_vec();
    let moved = reordered.remove(source);
    reordered.insert(destination, moved);
    Some(renumber(reordered))
}

/// Returns the first identifier that occurs more than once in `tasks`.
#[must_use]
pub fn first_repeated_id(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .iter()
        .map(Task::id)
        .find(|id| !seen.insert(*id))
        .cloned()
}

fn sort_by_order(tasks: &mut [Task]) {
    tasks.sort_by_key(Task::order);
}
