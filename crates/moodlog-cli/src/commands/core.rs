//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `resolve_config` - Config file plus command-line overrides
//! - `open_slot` / `open_controller` - Open the configured store
//! - `cmd_status` - Show where and how the history is stored, including SQLite slots

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use moodlog_core::{
    CheckInController, Config, Database, FileSlot, MoodHistoryStore, SnapshotSlot, SqliteSlot,
    StorageBackend,
};

/// Load config and apply --store / --backend overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    store: Option<PathBuf>,
    backend: Option<&str>,
) -> Result<Config> {
    let mut config = Config::load(config_path).context("Failed to load config")?;

    if let Some(backend) = backend {
        config.backend = backend
            .parse::<StorageBackend>()
            .context("Invalid --backend")?;
    }
    if let Some(store) = store {
        config.store_path = Some(store);
    }

    Ok(config)
}

/// Open the snapshot slot for the configured backend
pub fn open_slot(config: &Config) -> Result<Box<dyn SnapshotSlot>> {
    let path = config.resolved_store_path();

    match config.backend {
        StorageBackend::Json => Ok(Box::new(FileSlot::new(path))),
        StorageBackend::Sqlite => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create store directory {}", parent.display())
                    })?;
                }
            }
            let path_str = path.to_str().context("Store path is not valid UTF-8")?;
            // An unreadable database surfaces as an empty history, not an error
            Ok(Box::new(SqliteSlot::open(path_str, config.slot.clone())))
        }
    }
}

/// Open the store and hydrate the check-in state for `today`
pub fn open_controller(config: &Config, today: NaiveDate) -> Result<CheckInController> {
    let store = MoodHistoryStore::open(open_slot(config)?);
    Ok(CheckInController::hydrate(store, today).with_config(config))
}

pub fn cmd_status(config: &Config) -> Result<()> {
    let path = config.resolved_store_path();

    println!();
    println!("📊 moodlog Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Backend: {}", config.backend);
    println!("   Store: {}", path.display());

    if !path.exists() {
        println!("   Size: (no check-ins yet)");
        println!();
        return Ok(());
    }

    if let Ok(metadata) = fs::metadata(&path) {
        println!("   Size: {:.1} KB", metadata.len() as f64 / 1024.0);
    }

    if config.backend == StorageBackend::Sqlite {
        let path_str = path.to_str().context("Store path is not valid UTF-8")?;
        let listing = Database::new(path_str).and_then(|db| {
            let slots = db.list_slots()?;
            Ok((db, slots))
        });
        match listing {
            Ok((db, slots)) => {
                println!();
                println!("   Slots in {}:", db.path());
                if slots.is_empty() {
                    println!("     (none)");
                }
                for slot in slots {
                    let marker = if slot.name == config.slot { "*" } else { " " };
                    let updated = slot
                        .updated_at
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    println!(
                        "   {} {} ({} bytes, updated {})",
                        marker, slot.name, slot.size, updated
                    );
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                println!("      Check-ins will start from an empty history");
            }
        }
    }

    let store = MoodHistoryStore::open(open_slot(config)?);
    println!();
    println!("   Check-ins: {}", store.len());

    println!();
    Ok(())
}
