use chrono::Utc;
use chrono_tz::Tz;
use std::{env, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_PATH: &str = "counter.db";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("APP_TIMEZONE must be an IANA zone name, got {0:?}")]
    InvalidTimezone(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?;
        }

        if let Some(value) = lookup("APP_DATABASE_PATH") {
            config.database_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("APP_TIMEZONE") {
            config.timezone = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimezone(value.clone()))?;
        }

        Ok(config)
    }
}

/// Calendar date as `YYYY-MM-DD` in the given zone.
pub fn today_in(timezone: Tz) -> String {
    Utc::now().with_timezone(&timezone).date_naive().to_string()
}
