//! Analytics over a mood history snapshot
//!
//! Pure functions: they take whatever order the store hands out and sort
//! by timestamp themselves before any windowed computation.

use std::collections::HashSet;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::MoodRecord;

/// Streak lookback cap, in days
pub const MAX_STREAK_DAYS: u32 = 30;

/// Size of each trend window
const TREND_WINDOW: usize = 3;

/// Direction of recent mood compared with the window before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    /// Not enough history to compare
    Neutral,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::Neutral => "neutral",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Improving => "📈",
            Trend::Declining => "📉",
            Trend::Stable => "➡️",
            Trend::Neutral => "📊",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Copy of the history sorted by timestamp, oldest first
pub fn chronological(history: &[MoodRecord]) -> Vec<MoodRecord> {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// Mean mood value rounded half-up to one decimal, `None` for an empty history
///
/// Rounding is done on integer tenths, so an exact half such as 1.45 always
/// rounds up.
pub fn average_mood(history: &[MoodRecord]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let n = history.len() as u64;
    let sum: u64 = history.iter().map(|r| u64::from(r.value())).sum();
    let tenths = (sum * 20 + n) / (2 * n);
    Some(tenths as f64 / 10.0)
}

/// Compare the last three records against the three before them
///
/// Windows are positional, not calendar based: gaps between entries do not
/// change which records fall into each window.
pub fn classify_trend(history: &[MoodRecord]) -> Trend {
    let sorted = chronological(history);
    let n = sorted.len();
    if n < 2 {
        return Trend::Neutral;
    }

    let recent = &sorted[n.saturating_sub(TREND_WINDOW)..];
    let older = &sorted[n.saturating_sub(2 * TREND_WINDOW)..n.saturating_sub(TREND_WINDOW)];
    if recent.is_empty() || older.is_empty() {
        return Trend::Neutral;
    }

    // Cross-multiplied so unequal window sizes compare exactly
    let sum = |w: &[MoodRecord]| w.iter().map(|r| u64::from(r.value())).sum::<u64>();
    let recent_scaled = sum(recent) * older.len() as u64;
    let older_scaled = sum(older) * recent.len() as u64;

    let trend = match recent_scaled.cmp(&older_scaled) {
        std::cmp::Ordering::Greater => Trend::Improving,
        std::cmp::Ordering::Less => Trend::Declining,
        std::cmp::Ordering::Equal => Trend::Stable,
    };
    debug!(
        recent = recent.len(),
        older = older.len(),
        trend = trend.as_str(),
        "Classified mood trend"
    );
    trend
}

/// Consecutive days with a record, counting back from `today`
pub fn streak_length(history: &[MoodRecord], today: NaiveDate) -> u32 {
    streak_length_within(history, today, MAX_STREAK_DAYS)
}

/// Like `streak_length`, with an explicit lookback cap
///
/// No record today means no streak, whatever happened yesterday.
pub fn streak_length_within(history: &[MoodRecord], today: NaiveDate, max_days: u32) -> u32 {
    let days: HashSet<NaiveDate> = history.iter().map(|r| r.day()).collect();

    let mut streak = 0;
    for offset in 0..max_days {
        let day = today - Duration::days(i64::from(offset));
        if !days.contains(&day) {
            break;
        }
        streak += 1;
    }
    streak
}

pub fn total_check_ins(history: &[MoodRecord]) -> usize {
    history.len()
}

/// One point on the mood chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short display date, e.g. "Oct 17"
    pub date: String,
    pub value: u8,
    pub label: String,
}

/// Chart series, oldest first
pub fn chart_series(history: &[MoodRecord]) -> Vec<ChartPoint> {
    chronological(history)
        .iter()
        .map(|r| ChartPoint {
            date: r.timestamp.format("%b %-d").to_string(),
            value: r.value(),
            label: r.label().to_string(),
        })
        .collect()
}

/// Time-of-day greeting for a local hour (0-23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub average: Option<f64>,
    pub trend: Trend,
    pub streak: u32,
    pub total_check_ins: usize,
    /// Today's record, if any
    pub today: Option<MoodRecord>,
}

impl MoodSummary {
    pub fn compute(history: &[MoodRecord], today: NaiveDate, max_streak_days: u32) -> Self {
        Self {
            average: average_mood(history),
            trend: classify_trend(history),
            streak: streak_length_within(history, today, max_streak_days),
            total_check_ins: total_check_ins(history),
            today: history.iter().find(|r| r.day() == today).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, daily_history, history_on_days_ago};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average_mood(&[]), None);
    }

    #[test]
    fn test_average_two_values() {
        let history = daily_history(day(2026, 4, 1), &[4, 2]);
        assert_eq!(average_mood(&history), Some(3.0));
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let history = daily_history(day(2026, 4, 1), &[5, 4, 4]);
        // 13 / 3 = 4.333...
        assert_eq!(average_mood(&history), Some(4.3));

        let history = daily_history(day(2026, 4, 1), &[5, 5, 4]);
        // 14 / 3 = 4.666...
        assert_eq!(average_mood(&history), Some(4.7));
    }

    #[test]
    fn test_average_exact_half_rounds_up() {
        // 29 / 20 = 1.45
        let mut values = vec![2; 9];
        values.extend([1; 11]);
        let history = daily_history(day(2026, 4, 1), &values);
        assert_eq!(average_mood(&history), Some(1.5));

        // 5 / 4 = 1.25
        let history = daily_history(day(2026, 4, 1), &[1, 1, 1, 2]);
        assert_eq!(average_mood(&history), Some(1.3));
    }

    #[test]
    fn test_trend_neutral_for_short_histories() {
        for n in 0..=3 {
            let values = vec![5; n];
            let history = daily_history(day(2026, 4, 1), &values);
            assert_eq!(classify_trend(&history), Trend::Neutral, "length {}", n);
        }
    }

    #[test]
    fn test_trend_improving() {
        let history = daily_history(day(2026, 4, 1), &[1, 1, 1, 5, 5, 5]);
        assert_eq!(classify_trend(&history), Trend::Improving);
    }

    #[test]
    fn test_trend_declining() {
        let history = daily_history(day(2026, 4, 1), &[5, 5, 5, 1, 1, 1]);
        assert_eq!(classify_trend(&history), Trend::Declining);
    }

    #[test]
    fn test_trend_stable() {
        let history = daily_history(day(2026, 4, 1), &[3, 3, 3, 3, 3, 3]);
        assert_eq!(classify_trend(&history), Trend::Stable);
    }

    #[test]
    fn test_trend_four_records_uses_single_older_entry() {
        // older = [2], recent = [3, 3, 3]
        let history = daily_history(day(2026, 4, 1), &[2, 3, 3, 3]);
        assert_eq!(classify_trend(&history), Trend::Improving);
    }

    #[test]
    fn test_trend_ignores_records_beyond_six() {
        // Only the last six count: older = [3, 3, 3], recent = [3, 3, 3]
        let history = daily_history(day(2026, 4, 1), &[1, 1, 3, 3, 3, 3, 3, 3]);
        assert_eq!(classify_trend(&history), Trend::Stable);
    }

    #[test]
    fn test_trend_sorts_before_windowing() {
        let mut history = daily_history(day(2026, 4, 1), &[1, 1, 1, 5, 5, 5]);
        history.reverse();
        assert_eq!(classify_trend(&history), Trend::Improving);
    }

    #[test]
    fn test_trend_windows_are_positional() {
        let mut history = daily_history(day(2025, 1, 1), &[1, 1, 1]);
        history.extend(daily_history(day(2026, 6, 1), &[4, 4, 4]));
        assert_eq!(classify_trend(&history), Trend::Improving);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let today = day(2026, 4, 20);
        let history = history_on_days_ago(today, &[0, 1, 2, 5], 3);
        assert_eq!(streak_length(&history, today), 3);
    }

    #[test]
    fn test_streak_requires_today() {
        let today = day(2026, 4, 20);
        let history = history_on_days_ago(today, &[1, 2, 3], 4);
        assert_eq!(streak_length(&history, today), 0);
    }

    #[test]
    fn test_streak_empty() {
        assert_eq!(streak_length(&[], day(2026, 4, 20)), 0);
    }

    #[test]
    fn test_streak_capped_at_thirty() {
        let today = day(2026, 4, 20);
        let days: Vec<i64> = (0..45).collect();
        let history = history_on_days_ago(today, &days, 4);
        assert_eq!(streak_length(&history, today), 30);
        assert_eq!(streak_length_within(&history, today, 7), 7);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let today = day(2026, 3, 1);
        let history = history_on_days_ago(today, &[0, 1, 2], 2);
        assert_eq!(streak_length(&history, today), 3);
    }

    #[test]
    fn test_chart_series_sorted_with_short_dates() {
        let mut history = daily_history(day(2026, 10, 16), &[2, 4]);
        history.reverse();

        let series = chart_series(&history);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "Oct 16");
        assert_eq!(series[0].value, 2);
        assert_eq!(series[0].label, "Low");
        assert_eq!(series[1].date, "Oct 17");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn test_trend_display_helpers() {
        assert_eq!(Trend::Improving.to_string(), "improving");
        assert_eq!(Trend::Neutral.icon(), "📊");
        assert_eq!(
            serde_json::to_string(&Trend::Declining).unwrap(),
            "\"declining\""
        );
    }

    #[test]
    fn test_summary() {
        let today = at(2026, 4, 6).date_naive();
        let history = daily_history(day(2026, 4, 1), &[1, 1, 1, 5, 5, 5]);

        let summary = MoodSummary::compute(&history, today, MAX_STREAK_DAYS);
        assert_eq!(summary.average, Some(3.0));
        assert_eq!(summary.trend, Trend::Improving);
        assert_eq!(summary.streak, 6);
        assert_eq!(summary.total_check_ins, 6);
        assert_eq!(summary.today.unwrap().value(), 5);
    }

    #[test]
    fn test_summary_empty() {
        let summary = MoodSummary::compute(&[], day(2026, 4, 6), MAX_STREAK_DAYS);
        assert_eq!(summary.average, None);
        assert_eq!(summary.trend, Trend::Neutral);
        assert_eq!(summary.streak, 0);
        assert!(summary.today.is_none());
    }
}
