//! Blob codec shared by the snapshot adapters.
//!
//! The blob is a JSON array of `{id, name, description, completed, order}`
//! records. There is no version field.

use serde::de::Error as _;

use crate::task::{
    domain::{Task, first_repeated_id},
    ports::SnapshotResult,
};

/// Encodes the collection as a snapshot blob.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Codec`](crate::task::ports::SnapshotStoreError::Codec)
/// if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> SnapshotResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decodes a snapshot blob. A blank blob decodes to an empty collection.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Codec`](crate::task::ports::SnapshotStoreError::Codec)
/// if the blob is not a valid record list, including records with an empty
/// id, a zero rank, or an id shared by two records.
pub fn decode_tasks(blob: &str) -> SnapshotResult<Vec<Task>> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_str(blob)?;
    if let Some(duplicate) = first_repeated_id(&tasks) {
        return Err(serde_json::Error::custom(format!("duplicate task id `{duplicate}`")).into());
    }
    Ok(tasks)
}
