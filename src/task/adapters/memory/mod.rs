//! In-memory adapter implementations.
//!
//! These adapters keep blobs in process memory, standing in for browser
//! local storage and for tests without a filesystem.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;
