//! Domain model for the task list.
//!
//! The domain holds the task record, its validated scalars, and the pure
//! functions that keep display ranks consistent. Storage, notification, and
//! input validation stay outside this boundary.

mod display;
mod error;
mod ids;
mod ordering;
mod task;

pub use display::{display_order, search_by_name};
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskOrder};
pub use ordering::{
    first_repeated_id, insert_task, move_within, remove_task, renumber, toggle_task_completed,
    update_task,
};
pub use task::{PersistedTaskData, Task, TaskDraft};
