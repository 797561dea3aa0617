//! Durable key-value storage holding the serialized slot store and profile.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

/// Key holding the serialized `SlotStore`.
pub const SLOTS_KEY: &str = "time_tracker_data";
/// Key holding the serialized `Profile`.
pub const PROFILE_KEY: &str = "time_tracker_profile";

/// Minimal string-to-string storage. Values are JSON documents.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl KeyValueStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, chrono::Local::now().to_rfc3339()])?;
        Ok(())
    }
}

/// Process-local store, handy for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
