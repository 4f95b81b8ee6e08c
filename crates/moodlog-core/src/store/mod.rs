//! Mood history store with pluggable snapshot slots
//!
//! The whole history is persisted as one snapshot in a named slot:
//! read entirely when the store is opened, written entirely after every
//! mutation.
//!
//! # Architecture
//!
//! - `SnapshotSlot` trait defines the interface for storage backends
//! - `MemorySlot` keeps the snapshot in process (tests, embedding)
//! - `FileSlot` stores the snapshot as a JSON file
//! - `SqliteSlot` (in `db`) stores it as a row in a SQLite table
//!
//! # Snapshot Format
//!
//! A JSON array of `{emoji, label, value, timestamp}` objects with RFC 3339
//! timestamps. A snapshot that fails to decode is treated as empty history.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::MoodRecord;

mod file;

pub use file::FileSlot;

/// Default slot name for the history snapshot
pub const DEFAULT_SLOT: &str = "moodHistory";

/// Trait for snapshot storage backends
///
/// A slot holds at most one serialized payload and is only ever touched by
/// `MoodHistoryStore`.
pub trait SnapshotSlot: Send + Sync {
    /// Human-readable name for this slot
    fn name(&self) -> &str;

    /// Read the stored payload, `None` if nothing was ever written
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored payload
    fn write(&self, payload: &str) -> Result<()>;
}

impl<S: SnapshotSlot + ?Sized> SnapshotSlot for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> Result<()> {
        (**self).write(payload)
    }
}

impl<S: SnapshotSlot + ?Sized> SnapshotSlot for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> Result<()> {
        (**self).write(payload)
    }
}

/// In-process slot
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds a payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Current payload, if any
    pub fn payload(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|p| p.clone())
    }
}

impl SnapshotSlot for MemorySlot {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self) -> Result<Option<String>> {
        let payload = self
            .payload
            .lock()
            .map_err(|_| Error::Storage("memory slot lock poisoned".to_string()))?;
        Ok(payload.clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        let mut stored = self
            .payload
            .lock()
            .map_err(|_| Error::Storage("memory slot lock poisoned".to_string()))?;
        *stored = Some(payload.to_string());
        Ok(())
    }
}

/// A save that did not reach the slot
///
/// Non-fatal: the in-memory history stays authoritative for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistWarning {
    /// Slot that rejected the write
    pub slot: String,
    /// Underlying failure
    pub message: String,
}

impl std::fmt::Display for PersistWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mood history not saved to {} slot: {}",
            self.slot, self.message
        )
    }
}

/// Serialize a history into the snapshot format
pub fn encode_snapshot(history: &[MoodRecord]) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}

/// Parse a snapshot payload
pub fn decode_snapshot(payload: &str) -> Result<Vec<MoodRecord>> {
    Ok(serde_json::from_str(payload)?)
}

/// Ordered collection of mood records, at most one per calendar day
///
/// The store exclusively owns the sequence; callers get copies.
pub struct MoodHistoryStore {
    slot: Box<dyn SnapshotSlot>,
    history: Vec<MoodRecord>,
}

impl MoodHistoryStore {
    /// Open a store and hydrate it from the slot
    ///
    /// Missing or corrupt state yields an empty history.
    pub fn open(slot: impl SnapshotSlot + 'static) -> Self {
        let slot: Box<dyn SnapshotSlot> = Box::new(slot);
        let history = read_history(slot.as_ref());
        info!(
            slot = slot.name(),
            records = history.len(),
            "Mood history loaded"
        );
        Self { slot, history }
    }

    /// Re-read the persisted snapshot without touching the in-memory history
    ///
    /// Never fails: unreadable or malformed data comes back as empty.
    pub fn load(&self) -> Vec<MoodRecord> {
        read_history(self.slot.as_ref())
    }

    /// Replace the entry for `now`'s calendar day with `record`
    ///
    /// Any existing record on that day is dropped and `record` is appended,
    /// so the result is not sorted by time.
    pub fn upsert_today(&mut self, record: MoodRecord, now: DateTime<Local>) -> Vec<MoodRecord> {
        let today = now.date_naive();
        let before = self.history.len();
        self.history.retain(|r| r.day() != today);
        let replaced = before - self.history.len();
        self.history.push(record);

        debug!(
            day = %today,
            replaced,
            records = self.history.len(),
            "Upserted mood record"
        );
        self.history()
    }

    /// Write the full history to the slot, overwriting it
    pub fn save(&self) -> std::result::Result<(), PersistWarning> {
        let outcome = encode_snapshot(&self.history).and_then(|p| self.slot.write(&p));
        match outcome {
            Ok(()) => {
                info!(
                    slot = self.slot.name(),
                    records = self.history.len(),
                    "Mood history saved"
                );
                Ok(())
            }
            Err(e) => {
                warn!(slot = self.slot.name(), error = %e, "Failed to save mood history");
                Err(PersistWarning {
                    slot: self.slot.name().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Read-only copy of the history, in store order
    pub fn history(&self) -> Vec<MoodRecord> {
        self.history.clone()
    }

    /// The record for a calendar day, if one exists
    pub fn record_for(&self, day: NaiveDate) -> Option<MoodRecord> {
        self.history.iter().find(|r| r.day() == day).cloned()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

fn read_history(slot: &dyn SnapshotSlot) -> Vec<MoodRecord> {
    let payload = match slot.read() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Failed to read mood history, starting empty");
            return Vec::new();
        }
    };

    match decode_snapshot(&payload) {
        Ok(history) => history,
        Err(e) => {
            warn!(slot = slot.name(), error = %e, "Corrupt mood history, starting empty");
            Vec::new()
        }
    }
}
