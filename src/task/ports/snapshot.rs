//! Persistence port for task collection snapshots.
//!
//! The store treats persistence as an opaque blob under one namespaced key:
//! it loads once at start-up and saves the full collection after every
//! applied transition.

use crate::task::domain::Task;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotResult<T> = Result<T, SnapshotStoreError>;

/// Durable storage for the task collection.
#[cfg_attr(test, mockall::automock)]
pub trait TaskSnapshotStore: Send + Sync {
    /// Loads the previously saved collection.
    ///
    /// Returns an empty collection when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the blob cannot be read or
    /// decoded.
    fn load(&self) -> SnapshotResult<Vec<Task>>;

    /// Replaces the saved collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the blob cannot be encoded or
    /// written.
    fn save(&self, tasks: &[Task]) -> SnapshotResult<()>;
}

/// Namespaced key the collection blob is stored under.
///
/// Keys are non-empty, use ASCII alphanumerics plus `-`, `:` and `.`, and
/// never start with `.`. `_` is reserved: file-backed stores spell `:` as
/// `_` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    /// Key used when none is configured.
    pub const DEFAULT: &'static str = "persist:tasks";

    /// Creates a validated key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::InvalidKey`] when the value is empty,
    /// starts with `.`, or contains a disallowed character.
    pub fn new(value: impl Into<String>) -> Result<Self, SnapshotStoreError> {
        let raw = value.into();
        let allowed = |ch: char| ch.is_ascii_alphanumeric() || matches!(ch, '-' | ':' | '.');
        let is_valid = !raw.is_empty() && !raw.starts_with('.') && raw.chars().all(allowed);
        if !is_valid {
            return Err(SnapshotStoreError::InvalidKey(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SnapshotKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl AsRef<str> for SnapshotKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The configured key is not usable.
    #[error("invalid snapshot key '{0}'")]
    InvalidKey(String),

    /// Reading or writing the blob failed.
    #[error("snapshot I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The blob could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Codec(Arc<serde_json::Error>),

    /// Any other persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps an arbitrary persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<std::io::Error> for SnapshotStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for SnapshotStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(Arc::new(err))
    }
}
