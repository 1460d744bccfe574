//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod observer;
pub mod snapshot;
pub mod validator;

pub use observer::{SubscriptionId, TaskObserver};
pub use snapshot::{SnapshotKey, SnapshotResult, SnapshotStoreError, TaskSnapshotStore};
pub use validator::{TaskValidator, ValidationConfig, ValidationResult};
