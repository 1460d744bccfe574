//! Adapter implementations for task list ports.
//!
//! - `memory`: process-local key/value blob storage
//! - `file`: one JSON blob per key inside a directory

pub mod codec;
pub mod file;
pub mod memory;
