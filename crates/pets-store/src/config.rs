//! Store configuration
//!
//! Layered, lowest priority first: built-in defaults, an optional
//! `pets.toml` in the working directory, `PETS_*` environment variables,
//! then an explicit database path override.

use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{config_error, Result};

/// Default database file name
pub const DEFAULT_DB_FILE: &str = "pets_shelter.db";
/// Default busy timeout (ms)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "pets.toml";
/// Environment variable prefix (`PETS_PATH`, `PETS_JOURNAL_MODE`, ...)
pub const ENV_PREFIX: &str = "PETS";

/// SQLite journal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JournalMode {
    #[default]
    Wal,
    Delete,
    Memory,
}

impl JournalMode {
    /// Pragma value for `PRAGMA journal_mode`
    pub fn pragma_value(self) -> &'static str {
        match self {
            JournalMode::Wal => "wal",
            JournalMode::Delete => "delete",
            JournalMode::Memory => "memory",
        }
    }
}

/// Settings for opening the pet database
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Database file path
    pub path: PathBuf,

    #[serde(default)]
    pub journal_mode: JournalMode,

    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_FILE),
            journal_mode: JournalMode::default(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Config pointing at an explicit database file, other settings default
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Load layered configuration rooted at `dir`
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the file or environment holds values
    /// that do not deserialize (e.g. an unknown journal mode).
    pub fn load(dir: &Path, path_override: Option<PathBuf>) -> Result<Self> {
        let defaults = Self::default();
        let override_path = path_override.map(|p| p.to_string_lossy().into_owned());

        Config::builder()
            .set_default("path", defaults.path.to_string_lossy().into_owned())
            .and_then(|b| b.set_default("journal_mode", defaults.journal_mode.pragma_value()))
            .and_then(|b| b.set_default("busy_timeout_ms", defaults.busy_timeout_ms as i64))
            .map(|b| {
                b.add_source(File::from(dir.join(CONFIG_FILE)).required(false))
                    .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            })
            .and_then(|b| b.set_override_option("path", override_path))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<StoreConfig>())
            .map_err(config_error)
    }
}
