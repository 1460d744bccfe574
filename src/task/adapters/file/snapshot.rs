//! File-backed snapshot store scoped to a single directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::debug;

use crate::task::{
    adapters::codec::{decode_tasks, encode_tasks},
    domain::Task,
    ports::{SnapshotKey, SnapshotResult, TaskSnapshotStore},
};

/// Snapshot store writing one JSON file per key.
///
/// All file access goes through a capability handle on the configured
/// directory; the blob for key `persist:tasks` lives in `persist_tasks.json`.
/// Saves write a temporary sibling and rename it over the previous blob.
#[derive(Debug)]
pub struct FileSnapshotStore {
    dir: Dir,
    key: SnapshotKey,
}

impl FileSnapshotStore {
    /// Opens `path` for snapshot storage, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`](crate::task::ports::SnapshotStoreError::Io)
    /// when the directory cannot be created or opened.
    pub fn open(path: &Utf8Path, key: SnapshotKey) -> SnapshotResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir, key })
    }

    /// Returns the key this store reads and writes.
    #[must_use]
    pub const fn key(&self) -> &SnapshotKey {
        &self.key
    }

    /// Returns the blob's file name inside the storage directory.
    ///
    /// Keys never contain `_`, so distinct keys map to distinct files.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.key.as_str().replace(':', "_"))
    }
}

impl TaskSnapshotStore for FileSnapshotStore {
    fn load(&self) -> SnapshotResult<Vec<Task>> {
        let file_name = self.file_name();
        match self.dir.read_to_string(&file_name) {
            Ok(blob) => decode_tasks(&blob),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(key = %self.key, "no saved snapshot, starting empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let blob = encode_tasks(tasks)?;
        let file_name = self.file_name();
        let staging = format!("{file_name}.tmp");
        self.dir.write(&staging, blob)?;
        self.dir.rename(&staging, &self.dir, &file_name)?;
        Ok(())
    }
}
