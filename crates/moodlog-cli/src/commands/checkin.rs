//! Check-in command implementations (checkin, today, moods)

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use moodlog_core::{CheckInState, Config, Error, MoodLevel};

use super::open_controller;

pub fn cmd_checkin(config: &Config, mood: &str, update: bool, now: DateTime<Local>) -> Result<()> {
    let level: MoodLevel = mood
        .parse()
        .with_context(|| format!("Invalid mood '{}' (use 1-5 or great/good/okay/low/sad)", mood))?;

    let mut controller = open_controller(config, now.date_naive())?;
    if update {
        controller.request_update();
    }

    let outcome = match controller.record_level(level, now) {
        Ok(outcome) => outcome,
        Err(Error::AlreadyCheckedIn(day)) => {
            let current = controller
                .todays_record(day)
                .map(|r| format!("{} {}", r.emoji(), r.label()))
                .unwrap_or_default();
            bail!(
                "Already checked in for {} ({}). Use --update to change it.",
                day.format("%b %-d"),
                current
            );
        }
        Err(e) => return Err(e).context("Failed to record mood"),
    };

    println!();
    println!(
        "{}  Thank you for sharing. Your mood has been recorded for {}.",
        outcome.record.emoji(),
        now.format("%b %-d, %Y")
    );
    if outcome.replaced {
        println!("   (Replaced today's earlier check-in)");
    }
    if let Some(warning) = &outcome.warning {
        println!("   ⚠️  {}", warning);
    }
    println!();

    Ok(())
}

pub fn cmd_today(config: &Config, now: DateTime<Local>) -> Result<()> {
    let today = now.date_naive();
    let controller = open_controller(config, today)?;

    println!();
    match (controller.state(), controller.todays_record(today)) {
        (CheckInState::CheckedIn, Some(record)) => {
            println!(
                "{}  You're feeling {} today",
                record.emoji(),
                record.label().to_lowercase()
            );
            println!("   Changed your mind? moodlog checkin <mood> --update");
        }
        _ => {
            println!("How are you feeling today?");
            println!("   moodlog checkin <mood>   (see: moodlog moods)");
        }
    }
    println!();

    Ok(())
}

pub fn cmd_moods() -> Result<()> {
    println!();
    for level in MoodLevel::ALL {
        println!("  {}  {}  {}", level.value(), level.emoji(), level.label());
    }
    println!();
    Ok(())
}
