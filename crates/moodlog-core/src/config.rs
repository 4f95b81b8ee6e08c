//! Configuration for moodlog
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit override path, or the override in the data dir
//!    (~/.local/share/moodlog/config/moodlog.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analytics::MAX_STREAK_DAYS;
use crate::error::{Error, Result};
use crate::recommendations::DEFAULT_LIMIT;
use crate::store::DEFAULT_SLOT;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/moodlog.toml");

/// Where the history snapshot lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Row in a SQLite database
    Sqlite,
    /// Standalone JSON file
    Json,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
        }
    }

    /// Default file name inside the data dir
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Sqlite => "moodlog.db",
            Self::Json => "moodlog.json",
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "db" => Ok(Self::Sqlite),
            "json" | "file" => Ok(Self::Json),
            _ => Err(Error::Config(format!("Unknown storage backend: {}", s))),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: StorageBackend,
    /// Explicit store location; `None` means the default in the data dir
    pub store_path: Option<PathBuf>,
    pub slot: String,
    pub recommendation_limit: usize,
    pub max_streak_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            store_path: None,
            slot: DEFAULT_SLOT.to_string(),
            recommendation_limit: DEFAULT_LIMIT,
            max_streak_days: MAX_STREAK_DAYS,
        }
    }
}

impl Config {
    /// Load configuration (override first, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let content = match path {
            Some(p) if p.exists() => {
                tracing::debug!("Loading config override from {}", p.display());
                fs::read_to_string(&p)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::from_toml(&content)
    }

    /// Parse config from TOML content, defaulting missing keys
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(storage) = raw.storage {
            if let Some(backend) = storage.backend {
                config.backend = backend.parse()?;
            }
            if let Some(path) = storage.path {
                config.store_path = Some(path);
            }
            if let Some(slot) = storage.slot {
                if slot.trim().is_empty() {
                    return Err(Error::Config("storage.slot must not be empty".to_string()));
                }
                config.slot = slot;
            }
        }

        if let Some(limit) = raw.recommendations.and_then(|r| r.limit) {
            config.recommendation_limit = limit;
        }

        if let Some(days) = raw.streak.and_then(|s| s.max_lookback_days) {
            if !(1..=MAX_STREAK_DAYS).contains(&days) {
                return Err(Error::Config(format!(
                    "streak.max_lookback_days must be between 1 and {}, got {}",
                    MAX_STREAK_DAYS, days
                )));
            }
            config.max_streak_days = days;
        }

        Ok(config)
    }

    /// Store location: the explicit path, or the backend's file in the data dir
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| default_data_dir().join(self.backend.default_file_name()))
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    storage: Option<RawStorage>,
    recommendations: Option<RawRecommendations>,
    streak: Option<RawStreak>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    backend: Option<String>,
    path: Option<PathBuf>,
    slot: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecommendations {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawStreak {
    max_lookback_days: Option<u32>,
}

/// Default data directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodlog")
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("moodlog").join("config").join("moodlog.toml"))
}
