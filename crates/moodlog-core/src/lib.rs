//! Moodlog Core Library
//!
//! Shared functionality for the moodlog daily mood tracker:
//! - Mood records and the one-entry-per-day history store
//! - Pluggable snapshot slots (memory, JSON file, SQLite)
//! - Analytics over a history snapshot (average, trend, streak)
//! - Mood-aware recommendation selection from a static catalog
//! - Check-in controller driving the daily check-in flow
//! - Configuration with embedded defaults

pub mod analytics;
pub mod checkin;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod recommendations;
pub mod store;

/// Test utilities: failing slot, fixed instants, history builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analytics::{ChartPoint, MoodSummary, Trend};
pub use checkin::{CheckInController, CheckInOutcome, CheckInState};
pub use config::{Config, StorageBackend};
pub use db::{Database, SqliteSlot};
pub use error::{Error, Result};
pub use models::{MoodLevel, MoodRecord};
pub use recommendations::{Category, MoodRange, Recommendation, CATALOG};
pub use store::{FileSlot, MemorySlot, MoodHistoryStore, PersistWarning, SnapshotSlot};
