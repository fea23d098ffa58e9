use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// PostgreSQL URL. Without it the service runs on an in-memory store.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let pool_size = parse_or(
            "DATABASE_POOL_SIZE",
            non_empty("DATABASE_POOL_SIZE"),
            DEFAULT_POOL_SIZE,
            "positive integer",
        )?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
                expected: "positive integer",
            });
        }

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", non_empty("PORT"), DEFAULT_PORT, "port number")?,
            pool_size,
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value,
            expected,
        }),
    }
}
