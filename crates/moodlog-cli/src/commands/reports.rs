//! Read-only report commands (summary, history, suggest)

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Timelike};
use moodlog_core::analytics::{self, chart_series, chronological};
use moodlog_core::recommendations::{select, CATALOG};
use moodlog_core::{Config, MoodLevel};

use super::open_controller;

pub fn cmd_summary(config: &Config, json: bool, now: DateTime<Local>) -> Result<()> {
    let today = now.date_naive();
    let controller = open_controller(config, today)?;
    let summary = controller.summary(today);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          🌱 moodlog Summary             │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}!", analytics::greeting(now.hour()));
    println!();
    println!("  Day streak:      {}", summary.streak);
    println!("  Check-ins:       {}", summary.total_check_ins);
    match &summary.today {
        Some(record) => println!("  Today's mood:    {} {}", record.emoji(), record.label()),
        None => println!("  Today's mood:    (not checked in)"),
    }

    if summary.total_check_ins == 0 {
        println!();
        println!("  No data yet. Start tracking your mood to see trends and insights over time.");
        println!();
        return Ok(());
    }

    if let Some(avg) = summary.average {
        println!("  Average mood:    {:.1}", avg);
    }
    println!(
        "  Trend:           {} {}",
        summary.trend.icon(),
        capitalize(summary.trend.as_str())
    );
    println!();

    Ok(())
}

pub fn cmd_history(config: &Config, json: bool, now: DateTime<Local>) -> Result<()> {
    let controller = open_controller(config, now.date_naive())?;
    let history = controller.history();

    if json {
        println!("{}", serde_json::to_string_pretty(&chart_series(&history))?);
        return Ok(());
    }

    println!();
    if history.is_empty() {
        println!("  No check-ins yet.");
    }
    for record in chronological(&history) {
        println!(
            "  {}  {}  {:<6} ({})",
            record.timestamp.format("%a %b %-d, %Y"),
            record.emoji(),
            record.label(),
            record.value()
        );
    }
    println!();

    Ok(())
}

pub fn cmd_suggest(
    config: &Config,
    mood: Option<&str>,
    limit: Option<usize>,
    json: bool,
    now: DateTime<Local>,
) -> Result<()> {
    let today = now.date_naive();

    let current = match mood {
        Some(m) => Some(
            m.parse::<MoodLevel>()
                .with_context(|| format!("Invalid mood '{}'", m))?,
        ),
        None => open_controller(config, today)?
            .todays_record(today)
            .map(|r| r.level),
    };
    let limit = limit.unwrap_or(config.recommendation_limit);
    let picks = select(CATALOG, current, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    println!();
    match current {
        Some(level) => println!("🌿 Wellness Recommendations (personalized for {})", level),
        None => println!("🌿 Wellness Recommendations"),
    }
    println!();
    if picks.is_empty() {
        println!("  No suggestions for this mood.");
    }
    for rec in &picks {
        println!("  {}  {} [{} · {}]", rec.icon, rec.title, rec.category, rec.duration);
        println!("     {}", rec.description);
    }
    if current.is_none() {
        println!();
        println!("  💡 Check in with your mood to get personalized recommendations!");
    }
    println!();

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
