//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config resolution, opening the store) and status
//! - `checkin` - Check-in commands (checkin, today, moods)
//! - `reports` - Read-only views (summary, history, suggest)

pub mod checkin;
pub mod core;
pub mod reports;

// Re-export command functions for main.rs
pub use checkin::*;
pub use core::*;
pub use reports::*;
