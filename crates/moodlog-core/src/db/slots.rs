//! Snapshot slot database operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};
use tracing::warn;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::store::SnapshotSlot;

/// Metadata about a stored slot
#[derive(Debug, Clone)]
pub struct SlotInfo {
    pub name: String,
    /// Payload size in bytes
    pub size: usize,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Database {
    /// Read a slot's payload
    pub fn read_slot(&self, name: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let payload = conn
            .query_row(
                "SELECT payload FROM snapshot_slots WHERE name = ?",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    /// Insert or replace a slot's payload
    pub fn write_slot(&self, name: &str, payload: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO snapshot_slots (name, payload, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
            params![name, payload],
        )?;
        Ok(())
    }

    /// List stored slots
    pub fn list_slots(&self) -> Result<Vec<SlotInfo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, LENGTH(payload), updated_at FROM snapshot_slots ORDER BY name",
        )?;

        let slots = stmt
            .query_map([], |row| {
                let updated_at: Option<String> = row.get(2)?;
                Ok(SlotInfo {
                    name: row.get(0)?,
                    size: row.get::<_, i64>(1)? as usize,
                    updated_at: updated_at.as_deref().and_then(parse_datetime),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(slots)
    }
}

/// Snapshot slot stored as a row in the database
///
/// A database that fails to open does not fail the slot: reads and writes
/// report the failure instead, so the store treats it as missing state.
#[derive(Clone)]
pub struct SqliteSlot {
    db: std::result::Result<Database, String>,
    name: String,
}

impl SqliteSlot {
    pub fn new(db: Database, name: impl Into<String>) -> Self {
        Self {
            db: Ok(db),
            name: name.into(),
        }
    }

    /// Open the database at `path` and bind the slot `name`
    pub fn open(path: &str, name: impl Into<String>) -> Self {
        let db = Database::new(path).map_err(|e| {
            warn!(path, error = %e, "Failed to open mood database");
            e.to_string()
        });
        Self {
            db,
            name: name.into(),
        }
    }

    fn db(&self) -> Result<&Database> {
        self.db
            .as_ref()
            .map_err(|e| Error::Storage(format!("database unavailable: {}", e)))
    }
}

impl SnapshotSlot for SqliteSlot {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn read(&self) -> Result<Option<String>> {
        self.db()?.read_slot(&self.name)
    }

    fn write(&self, payload: &str) -> Result<()> {
        self.db()?.write_slot(&self.name, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_none() {
        let db = Database::in_memory().unwrap();
        assert!(db.read_slot("moodHistory").unwrap().is_none());
    }

    #[test]
    fn test_write_slot_upserts() {
        let db = Database::in_memory().unwrap();
        db.write_slot("moodHistory", "[1]").unwrap();
        db.write_slot("moodHistory", "[1,2]").unwrap();

        assert_eq!(db.read_slot("moodHistory").unwrap().as_deref(), Some("[1,2]"));

        let slots = db.list_slots().unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].name, "moodHistory");
        assert_eq!(slots[0].size, 5);
        assert!(slots[0].updated_at.is_some());
    }

    #[test]
    fn test_slots_are_independent() {
        let db = Database::in_memory().unwrap();
        let a = SqliteSlot::new(db.clone(), "a");
        let b = SqliteSlot::new(db, "b");

        a.write("alpha").unwrap();
        assert_eq!(a.read().unwrap().as_deref(), Some("alpha"));
        assert!(b.read().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_database_fails_soft() {
        use crate::store::MoodHistoryStore;
        use crate::test_utils::at;
        use crate::MoodRecord;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moodlog.db");
        std::fs::write(&path, "not a sqlite database ".repeat(64)).unwrap();

        let slot = SqliteSlot::open(path.to_str().unwrap(), "moodHistory");
        assert!(matches!(slot.read(), Err(Error::Storage(_))));

        let mut store = MoodHistoryStore::open(slot);
        assert!(store.is_empty());

        let now = at(2026, 10, 17);
        store.upsert_today(MoodRecord::from_value(4, now).unwrap(), now);
        let warning = store.save().unwrap_err();
        assert_eq!(warning.slot, "sqlite");
        assert_eq!(store.len(), 1);
    }
}
