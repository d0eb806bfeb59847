//! `SQLite`-backed key-value store.
//!
//! # Thread Safety
//!
//! [`SqliteStore`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`. Move it between threads freely, but wrap it in a `Mutex` to share.
//!
//! # Schema
//!
//! A single `kv` table maps a key to a TEXT value holding the JSON array for
//! that log. Timestamps inside the JSON are ISO 8601 strings.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::backend::{BackendError, KeyValueStore};

/// Database connection wrapper.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a store at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Opens an in-memory store.
    ///
    /// Useful for testing. The data is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, BackendError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Initializes the schema. Idempotent.
    fn init(&self) -> Result<(), BackendError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.conn.execute(
            "
            INSERT INTO kv (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), BackendError> {
        if keys.is_empty() {
            return Ok(());
        }
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM kv WHERE key = ?")?;
            for key in keys {
                stmt.execute([key])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_in_memory_store() {
        assert!(SqliteStore::open_in_memory().is_ok());
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("meals").unwrap(), None);
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("meals", "[]").unwrap();
        store.set("meals", "[1]").unwrap();
        assert_eq!(store.get("meals").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn remove_deletes_every_key() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("meals", "[]").unwrap();
        store.set("moods", "[]").unwrap();
        store.set("other", "{}").unwrap();

        store.remove(&["meals", "moods", "never-set"]).unwrap();

        assert_eq!(store.get("meals").unwrap(), None);
        assert_eq!(store.get("moods").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn data_survives_reopen() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mj.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("moods", r#"[{"mood":"Happy"}]"#).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("moods").unwrap().as_deref(),
            Some(r#"[{"mood":"Happy"}]"#)
        );
    }
}
