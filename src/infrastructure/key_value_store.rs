// src/infrastructure/key_value_store.rs
//
// Durable key-value storage
//
// CRITICAL RULES:
// - Values are opaque text; structure is the typed helpers' concern
// - Writes replace the whole value for a key
// - A malformed stored value is reported, never silently dropped
// - Write failures propagate to the caller; there is no retry

use std::sync::Arc;

use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

/// Synchronous, string-keyed durable storage.
///
/// Repositories receive this as an explicit handle at construction; nothing
/// above the repository layer touches it directly.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Text stored under `key`, or `None` when the key was never set.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// SQLite-backed store over the shared connection pool.
pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT value FROM kv_entries WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![key, value],
        )?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;

        Ok(())
    }
}

/// Outcome of a typed read.
///
/// "Never set" and "set but unreadable" are distinct states: callers decide
/// whether corruption is fatal or a reset-to-default, instead of both
/// collapsing into one absent signal.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue<T> {
    /// The key has never been set (or was reset).
    Missing,
    /// The key holds text that does not parse; the stored text is preserved.
    Corrupt { raw: String },
    /// The key holds a well-formed value.
    Found(T),
}

impl<T> StoredValue<T> {
    /// The value, with both `Missing` and `Corrupt` collapsed to `None`.
    pub fn found(self) -> Option<T> {
        match self {
            StoredValue::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Serialize `value` to JSON text and store it under `key`.
pub fn set_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// Read and deserialize the JSON value under `key`.
///
/// A missing key is `Missing`. Text that fails to parse is logged as a
/// diagnostic and returned as `Corrupt` with the original text intact.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<StoredValue<T>> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(StoredValue::Missing);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(StoredValue::Found(value)),
        Err(err) => {
            log::warn!("Stored value for key '{}' is not valid JSON: {}", key, err);
            Ok(StoredValue::Corrupt { raw })
        }
    }
}
