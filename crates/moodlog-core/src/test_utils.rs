//! Test utilities for moodlog-core
//!
//! Deterministic instants and histories, plus a slot that always fails so
//! the soft-failure paths can be exercised.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

use crate::error::{Error, Result};
use crate::models::MoodRecord;
use crate::store::SnapshotSlot;

/// Local noon on the given day
///
/// Noon is never skipped or repeated by a DST transition.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Local> {
    at_time(year, month, day, 12, 0)
}

/// Local instant at the given wall-clock time
pub fn at_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
}

/// Local noon on a calendar day
pub fn noon_of(day: NaiveDate) -> DateTime<Local> {
    Local
        .from_local_datetime(&day.and_hms_opt(12, 0, 0).expect("valid time"))
        .single()
        .expect("unambiguous local time")
}

/// One record per consecutive day, starting at `first_day`, oldest first
pub fn daily_history(first_day: NaiveDate, values: &[i64]) -> Vec<MoodRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let day = first_day + Duration::days(i as i64);
            MoodRecord::from_value(v, noon_of(day)).expect("valid mood value")
        })
        .collect()
}

/// One record per listed day offset relative to `today` (0 = today, 1 = yesterday)
pub fn history_on_days_ago(today: NaiveDate, days_ago: &[i64], value: i64) -> Vec<MoodRecord> {
    days_ago
        .iter()
        .map(|&n| {
            MoodRecord::from_value(value, noon_of(today - Duration::days(n)))
                .expect("valid mood value")
        })
        .collect()
}

/// Slot whose reads and writes always fail
#[derive(Debug, Default)]
pub struct FailingSlot;

impl FailingSlot {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotSlot for FailingSlot {
    fn name(&self) -> &str {
        "failing"
    }

    fn read(&self) -> Result<Option<String>> {
        Err(Error::Storage("slot unavailable".to_string()))
    }

    fn write(&self, _payload: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".to_string()))
    }
}
