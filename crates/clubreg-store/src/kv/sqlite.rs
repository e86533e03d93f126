use super::KvStore;
use crate::db;
use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Backend keeping every key as a row of `kv_entries`
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Open (or create) the database file and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Fails when a migration fails.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite(e).with_entity_id(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| from_rusqlite(e).with_entity_id(key))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1", [key])
            .map_err(|e| from_rusqlite(e).with_entity_id(key))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_value() {
        let mut kv = SqliteKv::open_in_memory().unwrap();

        kv.set("clubs", "[]").unwrap();
        kv.set("clubs", "[{}]").unwrap();

        assert_eq!(kv.get("clubs").unwrap().as_deref(), Some("[{}]"));

        let rows: i64 = kv
            .conn
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let mut kv = SqliteKv::open_in_memory().unwrap();
        kv.remove("events").unwrap();
        assert_eq!(kv.get("events").unwrap(), None);
    }
}
