//! String key-value store on top of the `kv` table.

use std::sync::Arc;

use rusqlite::{Connection, OptionalExtension};

use shotnote_core::error::ShotnoteError;

use crate::db::Database;

/// Key-value store with string keys and string values.
#[derive(Debug, Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Read the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>, ShotnoteError> {
        self.db.with_conn(|conn| get_value(conn, key))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), ShotnoteError> {
        self.db.with_conn(|conn| set_value(conn, key, value))
    }

    /// Delete `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool, ShotnoteError> {
        self.db.with_conn(|conn| {
            let deleted = conn
                .execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])
                .map_err(|e| ShotnoteError::Storage(format!("Failed to delete key: {}", e)))?;
            Ok(deleted > 0)
        })
    }

    /// Replace the value under `key` with `f(current)`.
    ///
    /// Read and write happen under one database lock, so updates made
    /// through the same store never interleave.
    pub fn update<F>(&self, key: &str, f: F) -> Result<(), ShotnoteError>
    where
        F: FnOnce(Option<String>) -> Result<String, ShotnoteError>,
    {
        self.db.with_conn(|conn| {
            let current = get_value(conn, key)?;
            let next = f(current)?;
            set_value(conn, key, &next)
        })
    }
}

fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, ShotnoteError> {
    conn.query_row(
        "SELECT value FROM kv WHERE key = ?1",
        rusqlite::params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ShotnoteError::Storage(format!("Failed to read key: {}", e)))
}

fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), ShotnoteError> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, strftime('%s', 'now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        rusqlite::params![key, value],
    )
    .map_err(|e| ShotnoteError::Storage(format!("Failed to write key: {}", e)))?;
    Ok(())
}
