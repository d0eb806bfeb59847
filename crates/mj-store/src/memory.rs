//! In-memory key-value store with switchable failures.

use std::collections::HashMap;

use crate::backend::{BackendError, KeyValueStore};

/// A `HashMap` backend for tests and ephemeral sessions.
///
/// `fail_reads` and `fail_writes` make every subsequent call of that kind
/// return [`BackendError::Unavailable`] without touching the data.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value under `key`, bypassing failure switches.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        if self.fail_reads {
            return Err(BackendError::Unavailable(format!("read of {key} refused")));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        if self.fail_writes {
            return Err(BackendError::Unavailable(format!("write of {key} refused")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), BackendError> {
        if self.fail_writes {
            return Err(BackendError::Unavailable(format!(
                "remove of {} refused",
                keys.join(", ")
            )));
        }
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}
