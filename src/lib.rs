//! Taskboard: a single-list task manager core.
//!
//! This crate owns the task collection behind a task list user interface:
//! it keeps display ranks consistent across every edit, notifies observers
//! after each change, and snapshots the collection to durable storage.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task records and pure rank reconciliation
//! - **Ports**: Abstract trait interfaces for storage, observers, and validation
//! - **Adapters**: In-memory and file-backed snapshot stores
//!
//! # Modules
//!
//! - [`task`]: Task records, ordering, the task store, and persistence

pub mod task;
