//! Configuration management for the portal search server.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which the MCP transport owns.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the portal search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `<patient_id>.json` record snapshot per patient
    pub snapshot_dir: PathBuf,

    /// JSON file backing recent searches and onboarding progress
    pub state_file: PathBuf,

    /// How long an assembled record bundle stays cached (default: 5)
    pub cache_ttl_minutes: u64,

    /// Result cap when a search gives no limit (default: 10)
    pub default_search_limit: usize,

    /// Number of recent searches kept per patient (default: 5)
    pub recent_search_limit: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration, reading a `.env` file first if one exists.
    ///
    /// Required environment variables:
    /// - `PORTAL_SNAPSHOT_DIR`: directory of per-patient record snapshots
    ///
    /// Optional environment variables:
    /// - `PORTAL_STATE_FILE`: state file path (default: `portal-state.json`)
    /// - `PORTAL_CACHE_TTL_MINUTES`: bundle cache TTL (default: 5)
    /// - `SEARCH_DEFAULT_LIMIT`: default result cap (default: 10)
    /// - `RECENT_SEARCH_LIMIT`: recent searches kept (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints, so stdout stays clean
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration from the process environment only.
    pub fn load() -> ConfigResult<Self> {
        let snapshot_dir = env::var("PORTAL_SNAPSHOT_DIR")
            .map_err(|_| ConfigError::MissingVar("PORTAL_SNAPSHOT_DIR".to_string()))?;

        if snapshot_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PORTAL_SNAPSHOT_DIR".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let state_file =
            env::var("PORTAL_STATE_FILE").unwrap_or_else(|_| "portal-state.json".to_string());
        let cache_ttl_minutes = Self::parse_env_u64("PORTAL_CACHE_TTL_MINUTES", 5)?;
        let default_search_limit = Self::parse_env_positive("SEARCH_DEFAULT_LIMIT", 10)?;
        let recent_search_limit = Self::parse_env_positive("RECENT_SEARCH_LIMIT", 5)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            snapshot_dir: PathBuf::from(snapshot_dir.trim()),
            state_file: PathBuf::from(state_file),
            cache_ttl_minutes,
            default_search_limit,
            recent_search_limit,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a usize greater than zero.
    fn parse_env_positive(var_name: &str, default: usize) -> ConfigResult<usize> {
        let invalid = |val: &str| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a positive number, got: {}", val),
        };

        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(invalid(&val)),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_dir: PathBuf::from("snapshots"),
            state_file: PathBuf::from("portal-state.json"),
            cache_ttl_minutes: 5,
            default_search_limit: 10,
            recent_search_limit: 5,
            log_level: "error".to_string(),
        }
    }
}
