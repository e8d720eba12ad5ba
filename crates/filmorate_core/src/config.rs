//! Environment-driven runtime configuration.
//!
//! Recognized variables:
//! - `FILMORATE_DB_PATH`: SQLite file path (default `<temp>/filmorate.sqlite3`).
//! - `FILMORATE_LOG_LEVEL`: `trace|debug|info|warn|error` (default per build mode).
//! - `FILMORATE_LOG_DIR`: absolute log directory (default `<temp>/filmorate-logs`).
//!
//! Blank values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "FILMORATE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "FILMORATE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "FILMORATE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "filmorate.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "filmorate-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            db_path: value(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level: value(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: value(LOG_DIR_ENV).map_or(defaults.log_dir, PathBuf::from),
        }
    }
}
