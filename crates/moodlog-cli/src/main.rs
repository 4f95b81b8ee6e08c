//! moodlog CLI - Daily mood tracker
//!
//! Usage:
//!   moodlog checkin 4          Record today's mood
//!   moodlog checkin sad -u     Replace today's check-in
//!   moodlog summary            Streak, average and trend
//!   moodlog suggest            Suggestions for today's mood

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let config = commands::resolve_config(
        cli.config.as_deref(),
        cli.store.clone(),
        cli.backend.as_deref(),
    )?;

    // The only wall-clock read; everything below gets `now` passed in
    let now = Local::now();

    match cli.command {
        Commands::Checkin { mood, update } => commands::cmd_checkin(&config, &mood, update, now),
        Commands::Today => commands::cmd_today(&config, now),
        Commands::Moods => commands::cmd_moods(),
        Commands::Summary { json } => commands::cmd_summary(&config, json, now),
        Commands::History { json } => commands::cmd_history(&config, json, now),
        Commands::Suggest { mood, limit, json } => {
            commands::cmd_suggest(&config, mood.as_deref(), limit, json, now)
        }
        Commands::Status => commands::cmd_status(&config),
    }
}
