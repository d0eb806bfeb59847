//! The key-value collaborator the journal is persisted in.

use thiserror::Error;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The backend refused the operation.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store of JSON blobs.
///
/// No transactional guarantee is assumed across calls; callers do their own
/// read-modify-write.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Removes all `keys` in a single request.
    ///
    /// Either every key is removed or none is. Absent keys are not an error.
    fn remove(&mut self, keys: &[&str]) -> Result<(), BackendError>;
}
