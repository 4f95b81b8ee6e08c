//! Domain models for moodlog

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Self-reported mood, best to worst
///
/// The numeric value is the source of truth; label and emoji are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoodLevel {
    Sad = 1,
    Low = 2,
    Okay = 3,
    Good = 4,
    Great = 5,
}

impl MoodLevel {
    /// Selector order, best first
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Great,
        MoodLevel::Good,
        MoodLevel::Okay,
        MoodLevel::Low,
        MoodLevel::Sad,
    ];

    /// Map a raw value onto a level, rejecting anything outside 1..=5
    pub fn from_value(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Self::Sad),
            2 => Ok(Self::Low),
            3 => Ok(Self::Okay),
            4 => Ok(Self::Good),
            5 => Ok(Self::Great),
            _ => Err(Error::InvalidInput(format!(
                "mood value must be between 1 and 5, got {}",
                value
            ))),
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Low => "Low",
            Self::Sad => "Sad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Great => "😊",
            Self::Good => "🙂",
            Self::Okay => "😐",
            Self::Low => "😔",
            Self::Sad => "😢",
        }
    }
}

impl std::str::FromStr for MoodLevel {
    type Err = Error;

    /// Accepts either the numeric value ("4") or the label ("good")
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Self::from_value(value);
        }
        match s.to_lowercase().as_str() {
            "great" => Ok(Self::Great),
            "good" => Ok(Self::Good),
            "okay" | "ok" => Ok(Self::Okay),
            "low" => Ok(Self::Low),
            "sad" => Ok(Self::Sad),
            _ => Err(Error::InvalidInput(format!("Unknown mood: {}", s))),
        }
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One daily self-report
///
/// Only the local calendar day of `timestamp` matters for uniqueness and
/// streaks; the time of day is kept for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredRecord", try_from = "StoredRecord")]
pub struct MoodRecord {
    pub level: MoodLevel,
    pub timestamp: DateTime<Local>,
}

impl MoodRecord {
    pub fn new(level: MoodLevel, timestamp: DateTime<Local>) -> Self {
        Self { level, timestamp }
    }

    /// Build a record from a raw selector value
    pub fn from_value(value: i64, timestamp: DateTime<Local>) -> Result<Self> {
        Ok(Self::new(MoodLevel::from_value(value)?, timestamp))
    }

    /// Local calendar day of this record
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn value(&self) -> u8 {
        self.level.value()
    }

    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn emoji(&self) -> &'static str {
        self.level.emoji()
    }
}

/// Persisted shape of a record: `{emoji, label, value, timestamp}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    emoji: String,
    label: String,
    value: i64,
    timestamp: DateTime<Local>,
}

impl From<MoodRecord> for StoredRecord {
    fn from(record: MoodRecord) -> Self {
        Self {
            emoji: record.emoji().to_string(),
            label: record.label().to_string(),
            value: i64::from(record.value()),
            timestamp: record.timestamp,
        }
    }
}

impl TryFrom<StoredRecord> for MoodRecord {
    type Error = Error;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        let level = MoodLevel::from_value(stored.value)?;
        if stored.label != level.label() || stored.emoji != level.emoji() {
            tracing::debug!(
                value = stored.value,
                label = %stored.label,
                "Stored label/emoji disagree with value, re-deriving"
            );
        }
        Ok(Self::new(level, stored.timestamp))
    }
}
