//! Derived display views over the stored collection.
//!
//! Storage order carries no meaning; these helpers produce the order the
//! list is shown in.

use super::Task;

/// Returns the tasks in display order.
///
/// Incomplete tasks come first, then completed ones; each group is sorted
/// by ascending rank. Ties keep their storage order.
#[must_use]
pub fn display_order(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|task| (task.is_completed(), task.order()));
    sorted
}

/// Keeps the tasks whose name starts with `term`, ignoring case.
///
/// An empty term keeps everything. The relative order of `tasks` is kept.
#[must_use]
pub fn search_by_name(tasks: &[Task], term: &str) -> Vec<Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.name().to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}
