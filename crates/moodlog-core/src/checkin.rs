//! Daily check-in flow
//!
//! Two states: `AwaitingCheckIn` until today's mood is recorded, then
//! `CheckedIn`. `request_update` reopens today's selection without touching
//! data; the next `record_mood` replaces today's entry.
//!
//! Callers supply `now`/`today`; nothing here reads the wall clock.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::analytics::{MoodSummary, MAX_STREAK_DAYS};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{MoodLevel, MoodRecord};
use crate::recommendations::{self, Recommendation, CATALOG, DEFAULT_LIMIT};
use crate::store::{MoodHistoryStore, PersistWarning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInState {
    AwaitingCheckIn,
    CheckedIn,
}

impl CheckInState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingCheckIn => "awaiting_check_in",
            Self::CheckedIn => "checked_in",
        }
    }
}

impl std::fmt::Display for CheckInState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a successful `record_mood`
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    /// The record now stored for today
    pub record: MoodRecord,
    /// Whether an earlier record for today was replaced
    pub replaced: bool,
    /// Set when the history could not be persisted
    pub warning: Option<PersistWarning>,
}

/// Orchestrates the check-in flow over a history store
pub struct CheckInController {
    store: MoodHistoryStore,
    state: CheckInState,
    recommendation_limit: usize,
    max_streak_days: u32,
}

impl CheckInController {
    /// Derive the initial state from whether `today` already has a record
    pub fn hydrate(store: MoodHistoryStore, today: NaiveDate) -> Self {
        let state = if store.record_for(today).is_some() {
            CheckInState::CheckedIn
        } else {
            CheckInState::AwaitingCheckIn
        };
        info!(state = state.as_str(), day = %today, "Check-in state hydrated");

        Self {
            store,
            state,
            recommendation_limit: DEFAULT_LIMIT,
            max_streak_days: MAX_STREAK_DAYS,
        }
    }

    /// Apply display limits from configuration
    pub fn with_config(mut self, config: &Config) -> Self {
        self.recommendation_limit = config.recommendation_limit;
        self.max_streak_days = config.max_streak_days;
        self
    }

    pub fn state(&self) -> CheckInState {
        self.state
    }

    /// Record today's mood from a raw selector value (1-5)
    ///
    /// Out-of-range values are rejected with `InvalidInput`. While checked in
    /// for the same day, `request_update` must be called first.
    pub fn record_mood(&mut self, value: i64, now: DateTime<Local>) -> Result<CheckInOutcome> {
        let level = MoodLevel::from_value(value)?;
        self.record_level(level, now)
    }

    /// Record today's mood from an already validated level
    pub fn record_level(
        &mut self,
        level: MoodLevel,
        now: DateTime<Local>,
    ) -> Result<CheckInOutcome> {
        let today = now.date_naive();
        let existing = self.store.record_for(today);

        // A CheckedIn state carried over from an earlier day does not block
        if self.state == CheckInState::CheckedIn && existing.is_some() {
            return Err(Error::AlreadyCheckedIn(today));
        }

        let record = MoodRecord::new(level, now);
        self.store.upsert_today(record.clone(), now);
        let warning = self.store.save().err();
        self.state = CheckInState::CheckedIn;

        info!(
            day = %today,
            value = level.value(),
            replaced = existing.is_some(),
            persisted = warning.is_none(),
            "Mood recorded"
        );

        Ok(CheckInOutcome {
            record,
            replaced: existing.is_some(),
            warning,
        })
    }

    /// Reopen today's selection; no data changes
    pub fn request_update(&mut self) {
        self.state = CheckInState::AwaitingCheckIn;
    }

    pub fn todays_record(&self, today: NaiveDate) -> Option<MoodRecord> {
        self.store.record_for(today)
    }

    /// Read-only copy of the full history
    pub fn history(&self) -> Vec<MoodRecord> {
        self.store.history()
    }

    /// Average, trend, streak and totals for display
    pub fn summary(&self, today: NaiveDate) -> MoodSummary {
        MoodSummary::compute(&self.store.history(), today, self.max_streak_days)
    }

    /// Suggestions for today's mood, or the default set before checking in
    pub fn recommendations(&self, today: NaiveDate) -> Vec<Recommendation> {
        let current = self.todays_record(today).map(|r| r.level);
        recommendations::select(CATALOG, current, self.recommendation_limit)
    }
}
