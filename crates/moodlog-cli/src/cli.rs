//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// moodlog - Daily mood check-ins with trends, streaks and suggestions
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(about = "Track a daily mood and see how it is trending", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/moodlog/config/moodlog.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store path, overriding the configured location
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Storage backend: sqlite or json
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record today's mood (1-5 or great/good/okay/low/sad)
    Checkin {
        /// Mood value or label
        mood: String,

        /// Replace an existing check-in for today
        #[arg(short, long)]
        update: bool,
    },

    /// Show whether today's check-in is done
    Today,

    /// Show the available moods
    Moods,

    /// Show streak, average and trend
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show all check-ins, oldest first
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest wellness activities
    Suggest {
        /// Mood to suggest for (defaults to today's check-in)
        #[arg(short, long)]
        mood: Option<String>,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show store location and size
    Status,
}
