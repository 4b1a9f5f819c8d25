use super::db::Db;
use crate::libs::error::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_SLOT: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT: &str = "DELETE FROM slots WHERE key = ?1";

/// Named key/value slots, each holding one serialized blob.
pub struct Slots {
    pub conn: Connection,
}

impl Slots {
    pub fn new() -> StorageResult<Slots> {
        Ok(Slots { conn: Db::new()?.conn })
    }

    pub fn from_db(db: Db) -> Slots {
        Slots { conn: db.conn }
    }

    pub fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_SLOT, params![key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    /// Overwrites the slot, creating it when missing.
    pub fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(UPSERT_SLOT, params![key, value])?;

        Ok(())
    }

    /// Returns the number of removed slots (0 or 1).
    pub fn remove(&self, key: &str) -> StorageResult<usize> {
        let removed = self.conn.execute(DELETE_SLOT, params![key])?;

        Ok(removed)
    }
}
