//! Mood-aware wellness recommendations
//!
//! A static catalog of suggestions, each relevant to an inclusive range of
//! mood values. Selection filters by the current mood and keeps catalog
//! order; without a mood it falls back to the head of the catalog.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::models::MoodLevel;

/// Default number of suggestions shown
pub const DEFAULT_LIMIT: usize = 4;

/// Kind of activity a recommendation suggests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Mindfulness,
    Reflection,
    Physical,
    Entertainment,
    Relaxation,
    Social,
    Positivity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mindfulness => "Mindfulness",
            Self::Reflection => "Reflection",
            Self::Physical => "Physical",
            Self::Entertainment => "Entertainment",
            Self::Relaxation => "Relaxation",
            Self::Social => "Social",
            Self::Positivity => "Positivity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive range of mood values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodRange {
    pub low: u8,
    pub high: u8,
}

impl MoodRange {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub duration: &'static str,
    pub mood_range: MoodRange,
}

/// Built-in catalog, in display order
pub static CATALOG: &[Recommendation] = &[
    Recommendation {
        id: "1",
        title: "Deep Breathing Exercise",
        description: "Take 5 minutes to practice deep breathing to reduce stress and anxiety.",
        icon: "🫁",
        category: Category::Mindfulness,
        duration: "5 min",
        mood_range: MoodRange::new(1, 3),
    },
    Recommendation {
        id: "2",
        title: "Gratitude Journaling",
        description: "Write down three things you're grateful for today.",
        icon: "📝",
        category: Category::Reflection,
        duration: "10 min",
        mood_range: MoodRange::new(2, 4),
    },
    Recommendation {
        id: "3",
        title: "Quick Walk Outside",
        description: "Get some fresh air and natural light with a brief outdoor walk.",
        icon: "🚶‍♀️",
        category: Category::Physical,
        duration: "15 min",
        mood_range: MoodRange::new(1, 3),
    },
    Recommendation {
        id: "4",
        title: "Listen to Music",
        description: "Play your favorite uplifting songs to boost your mood.",
        icon: "🎵",
        category: Category::Entertainment,
        duration: "10 min",
        mood_range: MoodRange::new(2, 4),
    },
    Recommendation {
        id: "5",
        title: "Progressive Muscle Relaxation",
        description: "Release tension by systematically relaxing different muscle groups.",
        icon: "💆‍♀️",
        category: Category::Relaxation,
        duration: "15 min",
        mood_range: MoodRange::new(1, 3),
    },
    Recommendation {
        id: "6",
        title: "Connect with a Friend",
        description: "Reach out to someone you care about for a quick chat.",
        icon: "💬",
        category: Category::Social,
        duration: "20 min",
        mood_range: MoodRange::new(1, 4),
    },
    Recommendation {
        id: "7",
        title: "Celebrate Small Wins",
        description: "Acknowledge and celebrate your recent accomplishments.",
        icon: "🎉",
        category: Category::Positivity,
        duration: "5 min",
        mood_range: MoodRange::new(3, 5),
    },
    Recommendation {
        id: "8",
        title: "Mindful Tea Break",
        description: "Prepare and enjoy a warm beverage mindfully.",
        icon: "🍵",
        category: Category::Mindfulness,
        duration: "10 min",
        mood_range: MoodRange::new(2, 5),
    },
];

/// Pick up to `limit` suggestions for the current mood
///
/// Without a mood the first `limit` catalog entries are returned unfiltered.
/// With one, only entries whose range includes it are kept; a short or
/// empty result is valid and is not broadened.
pub fn select(
    catalog: &[Recommendation],
    current: Option<MoodLevel>,
    limit: usize,
) -> Vec<Recommendation> {
    let picked: Vec<Recommendation> = match current {
        None => catalog.iter().take(limit).cloned().collect(),
        Some(level) => catalog
            .iter()
            .filter(|rec| rec.mood_range.contains(level.value()))
            .take(limit)
            .cloned()
            .collect(),
    };

    debug!(
        mood = current.map(|l| l.value()),
        count = picked.len(),
        "Selected recommendations"
    );
    picked
}
