//! In-memory key/value snapshot store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::codec::{decode_tasks, encode_tasks},
    domain::Task,
    ports::{SnapshotKey, SnapshotResult, SnapshotStoreError, TaskSnapshotStore},
};

/// Thread-safe in-memory blob store keyed by namespace.
///
/// Clones share the same storage, so a store reopened from a clone sees
/// everything saved before.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    key: SnapshotKey,
    blobs: Arc<RwLock<HashMap<SnapshotKey, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store using the default key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle on the same storage that reads and writes `key`.
    #[must_use]
    pub fn with_key(&self, key: SnapshotKey) -> Self {
        Self {
            key,
            blobs: Arc::clone(&self.blobs),
        }
    }

    /// Returns the key this handle reads and writes.
    #[must_use]
    pub const fn key(&self) -> &SnapshotKey {
        &self.key
    }

    /// Returns the raw blob stored under this handle's key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] if the lock is poisoned.
    pub fn raw_blob(&self) -> SnapshotResult<Option<String>> {
        let blobs = self.blobs.read().map_err(poisoned)?;
        Ok(blobs.get(&self.key).cloned())
    }

    /// Stores a raw blob under this handle's key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] if the lock is poisoned.
    pub fn put_raw_blob(&self, blob: impl Into<String>) -> SnapshotResult<()> {
        let mut blobs = self.blobs.write().map_err(poisoned)?;
        blobs.insert(self.key.clone(), blob.into());
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> SnapshotStoreError {
    SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskSnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> SnapshotResult<Vec<Task>> {
        match self.raw_blob()? {
            Some(blob) => decode_tasks(&blob),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let blob = encode_tasks(tasks)?;
        self.put_raw_blob(blob)
    }
}
