//! SQLite-backed key-value storage.
//!
//! # Invariants
//! - One row per key in `kv_items`; writes are upserts.
//! - Connection must come from `db::open_db*` so the schema exists.

use super::kv::{KeyValueStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Storage area persisted in the `kv_items` table.
pub struct SqliteKeyValueStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStorage for SqliteKeyValueStorage<'_> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_items WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_items (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_items WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteKeyValueStorage;
    use crate::db::open_db_in_memory;
    use crate::storage::kv::KeyValueStorage;

    #[test]
    fn set_item_overwrites_previous_value() {
        let conn = open_db_in_memory().unwrap();
        let storage = SqliteKeyValueStorage::new(&conn);

        storage.set_item("mensajes", "[]").unwrap();
        storage.set_item("mensajes", "[1]").unwrap();

        assert_eq!(storage.get_item("mensajes").unwrap().as_deref(), Some("[1]"));
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv_items;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn remove_item_is_idempotent() {
        let conn = open_db_in_memory().unwrap();
        let storage = SqliteKeyValueStorage::new(&conn);

        storage.set_item("repertorio", "[]").unwrap();
        storage.remove_item("repertorio").unwrap();
        storage.remove_item("repertorio").unwrap();

        assert_eq!(storage.get_item("repertorio").unwrap(), None);
    }
}
