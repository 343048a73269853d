//! Device-local key-value persistence.
//!
//! The task store only needs "get bytes by key" and "set bytes by key", so
//! that is all the [`KeyValueStore`] trait asks for. [`SqliteKv`] backs the
//! CLI; [`MemoryKv`] backs unit tests and embedders that do not want a file.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    fn set(&mut self, key: &str, value: &[u8]) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Read a boolean flag. A missing or malformed value is `false`; a failed
    /// read is an error.
    fn read_flag(&self, key: &str) -> AppResult<bool> {
        Ok(match self.get(key)? {
            Some(bytes) => serde_json::from_slice::<bool>(&bytes).unwrap_or(false),
            None => false,
        })
    }

    /// Like [`KeyValueStore::read_flag`], with read errors counting as `false`.
    fn get_flag(&self, key: &str) -> bool {
        self.read_flag(key).unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> AppResult<()> {
        let bytes = serde_json::to_vec(&value)?;
        self.set(key, &bytes)
    }
}

/// Lets a caller lend a store to a [`crate::core::store::TodoStore`] and
/// keep using it afterwards.
impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// SQLite-backed store: one row per key in the `kv` table.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Open (or create) the database and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::open_with_notes(path).map(|(kv, _)| kv)
    }

    /// Like [`SqliteKv::open`], also returning one note per migration that
    /// was applied while opening.
    pub fn open_with_notes(path: &str) -> AppResult<(Self, Vec<String>)> {
        let pool = DbPool::new(path)?;
        let notes = init_db(&pool.conn)?;
        Ok((Self { pool }, notes))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn location(&self) -> String {
        self.pool.path()
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                // rows written by hand may hold TEXT instead of BLOB
                Ok(match row.get_ref(0)? {
                    ValueRef::Blob(b) => b.to_vec(),
                    ValueRef::Text(t) => t.to_vec(),
                    _ => Vec::new(),
                })
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false() {
        let mut kv = MemoryKv::new();
        assert!(!kv.get_flag("seen"));
        kv.set_flag("seen", true).unwrap();
        assert!(kv.get_flag("seen"));
        kv.set("seen", b"not json").unwrap();
        assert!(!kv.get_flag("seen"));
        assert!(!kv.read_flag("seen").unwrap());
    }

    #[test]
    fn opening_reports_migrations_once() {
        let dir = std::env::temp_dir().join("rtodo_kv_notes");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("notes.sqlite");
        let _ = std::fs::remove_file(&path);
        let path = path.to_string_lossy().to_string();

        let (_, notes) = SqliteKv::open_with_notes(&path).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("kv"));

        let (_, notes) = SqliteKv::open_with_notes(&path).unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn sqlite_kv_overwrites_and_removes() {
        let mut kv = SqliteKv::open(":memory:").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);

        kv.set("k", b"one").unwrap();
        kv.set("k", b"two").unwrap();
        assert_eq!(kv.get("k").unwrap(), Some(b"two".to_vec()));

        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }

    #[test]
    fn sqlite_kv_reads_text_values() {
        let kv = SqliteKv::open(":memory:").unwrap();
        kv.conn()
            .execute(
                "INSERT INTO kv (key, value) VALUES ('flag', 'true')",
                [],
            )
            .unwrap();
        assert!(kv.get_flag("flag"));
    }
}
