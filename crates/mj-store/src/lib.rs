//! Storage layer for the meal and mood journal.
//!
//! Each log lives under its own key as a JSON array, newest entry first.
//! [`EventStore`] turns the raw [`KeyValueStore`] into typed append, list and
//! clear operations.
//!
//! # Failure handling
//!
//! - Listing never fails. An absent key, a backend read error, invalid JSON
//!   or a non-array value all read as an empty log and are logged.
//!   Individual entries that do not decode are skipped and logged.
//! - Appending reads the whole array, prepends, and writes it back. A backend
//!   read error aborts the append rather than overwriting the log with a
//!   single entry; malformed stored JSON is replaced.
//! - Clearing removes both keys in one backend request.
//!
//! # Schema Evolution
//!
//! Entries are re-encoded in the canonical field names whenever their log is
//! appended to, so legacy spellings accepted on read disappear over time.
//! Entries that do not decode at all are carried over untouched.
//!
//! There is no concurrency token: two processes appending at once can lose
//! one of the writes.

mod backend;
mod memory;
mod sqlite;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use mj_core::{MealEvent, MoodEvent};

pub use backend::{BackendError, KeyValueStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors surfaced by [`EventStore`] writes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the current log before an append failed.
    #[error("failed to read {key}")]
    Read {
        key: String,
        #[source]
        source: BackendError,
    },
    /// Writing a log failed.
    #[error("failed to write {key}")]
    Write {
        key: String,
        #[source]
        source: BackendError,
    },
    /// Removing the logs failed; neither should be assumed removed.
    #[error("failed to clear journal")]
    Clear {
        #[source]
        source: BackendError,
    },
    /// An entry could not be serialized.
    #[error("failed to encode entry for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Keys under which the two logs are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub meals: String,
    pub moods: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            meals: "meals".to_string(),
            moods: "moods".to_string(),
        }
    }
}

/// Typed access to the meal and mood logs.
pub struct EventStore<S> {
    backend: S,
    keys: StoreKeys,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Wraps a backend using the default keys.
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StoreKeys::default())
    }

    pub const fn with_keys(backend: S, keys: StoreKeys) -> Self {
        Self { backend, keys }
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub const fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Prepends a meal to the meal log.
    pub fn append_meal(&mut self, meal: &MealEvent) -> Result<(), StoreError> {
        append_entry(&mut self.backend, &self.keys.meals, meal)
    }

    /// Prepends a mood to the mood log.
    pub fn append_mood(&mut self, mood: &MoodEvent) -> Result<(), StoreError> {
        append_entry(&mut self.backend, &self.keys.moods, mood)
    }

    /// Returns all meals, newest first.
    pub fn list_meals(&self) -> Vec<MealEvent> {
        list_entries(&self.backend, &self.keys.meals)
    }

    /// Returns all moods, newest first.
    pub fn list_moods(&self) -> Vec<MoodEvent> {
        list_entries(&self.backend, &self.keys.moods)
    }

    /// Removes both logs in a single backend request.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.backend
            .remove(&[self.keys.meals.as_str(), self.keys.moods.as_str()])
            .map_err(|source| StoreError::Clear { source })?;
        tracing::debug!(meals = %self.keys.meals, moods = %self.keys.moods, "cleared journal");
        Ok(())
    }
}

fn append_entry<S, E>(backend: &mut S, key: &str, entry: &E) -> Result<(), StoreError>
where
    S: KeyValueStore,
    E: Serialize + DeserializeOwned,
{
    let existing = match backend.get(key) {
        Ok(Some(raw)) => parse_array(key, &raw),
        Ok(None) => Vec::new(),
        Err(source) => {
            return Err(StoreError::Read {
                key: key.to_string(),
                source,
            });
        }
    };

    let encode_err = |source| StoreError::Encode {
        key: key.to_string(),
        source,
    };
    let mut entries = Vec::with_capacity(existing.len() + 1);
    entries.push(serde_json::to_value(entry).map_err(encode_err)?);
    entries.extend(existing.into_iter().map(canonicalize::<E>));

    let json = serde_json::to_string(&entries).map_err(encode_err)?;
    backend.set(key, &json).map_err(|source| StoreError::Write {
        key: key.to_string(),
        source,
    })?;

    tracing::debug!(key, entries = entries.len(), "appended entry");
    Ok(())
}

fn list_entries<S, E>(backend: &S, key: &str) -> Vec<E>
where
    S: KeyValueStore,
    E: DeserializeOwned,
{
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, %error, "failed to read log; treating as empty");
            return Vec::new();
        }
    };

    parse_array(key, &raw)
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(key, index, %error, "skipping malformed entry");
                None
            }
        })
        .collect()
}

/// Parses a stored log, treating anything but a JSON array as empty.
fn parse_array(key: &str, raw: &str) -> Vec<Value> {
    match serde_json::from_str(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(key, kind = json_kind(&other), "stored log is not an array; treating as empty");
            Vec::new()
        }
        Err(error) => {
            tracing::warn!(key, %error, "stored log is not valid JSON; treating as empty");
            Vec::new()
        }
    }
}

/// Re-encodes an entry with canonical field names, or keeps it as-is.
fn canonicalize<E: Serialize + DeserializeOwned>(value: Value) -> Value {
    serde_json::from_value::<E>(value.clone())
        .ok()
        .and_then(|entry| serde_json::to_value(&entry).ok())
        .unwrap_or(value)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
