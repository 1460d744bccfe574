//! Application services for the task list.

mod board;
mod store;

pub use board::{TaskBoard, TaskBoardError, TaskBoardResult};
pub use store::TaskStore;
