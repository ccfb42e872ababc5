//! Environment configuration for the operator tool.

use crate::error::{CliError, Result};

use std::path::PathBuf;

/// Loaded from environment variables; a `.env` file is honored in
/// development.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (default: ~/.hearth/hearth.db)
    pub db_path: PathBuf,

    /// Invite validity window in days (default: 30)
    pub invite_validity_days: i64,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Colored log output (default: true)
    pub log_colored: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let db_path = match std::env::var("HEARTH_DB") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_db_path()?,
        };

        let config = Self {
            db_path,

            invite_validity_days: std::env::var("HEARTH_INVITE_VALIDITY_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(hearth_core::DEFAULT_VALIDITY_DAYS),

            log_level: std::env::var("HEARTH_LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(log::LevelFilter::Info),

            log_colored: std::env::var("HEARTH_LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        Ok(config)
    }
}

fn default_db_path() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .ok_or_else(|| CliError::Config {
            message: "HEARTH_DB is not set and no home directory was found".to_string(),
        })?
        .join(".hearth");

    std::fs::create_dir_all(&dir).map_err(|e| CliError::Config {
        message: format!("Failed to create {}: {e}", dir.display()),
    })?;

    Ok(dir.join("hearth.db"))
}
