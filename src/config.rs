//! Environment configuration.
//!
//! Parsing goes through a lookup closure so tests never touch the process
//! environment; the binaries pass `std::env::var`.

use crate::{
    directory::{DEFAULT_CHECK_TIMEOUT, DEFAULT_USER_SERVICE_URL},
    store::DEFAULT_STORE_TIMEOUT,
};
use std::{str::FromStr, time::Duration};

pub const USER_SERVICE_PORT: u16 = 8080;
pub const POST_SERVICE_PORT: u16 = 8081;
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "TTTN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not valid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend {other:?}, expected mongo or memory")),
        }
    }
}

/// Settings both services share.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub mongo_uri: String,
    pub database: String,
    pub store_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PostServiceConfig {
    pub service: ServiceConfig,
    pub user_service_url: String,
    pub user_service_timeout: Duration,
}

impl ServiceConfig {
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(default_port: u16, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(&lookup, "PORT", default_port)?,
            store_backend: parse_or(&lookup, "STORE_BACKEND", StoreBackend::Mongo)?,
            mongo_uri: lookup("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            database: lookup("MONGO_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            store_timeout: secs_or(&lookup, "STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT)?,
        })
    }
}

impl PostServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            service: ServiceConfig::from_lookup(POST_SERVICE_PORT, &lookup)?,
            user_service_url: lookup("USER_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_USER_SERVICE_URL.to_string()),
            user_service_timeout: secs_or(
                &lookup,
                "USER_SERVICE_TIMEOUT_SECS",
                DEFAULT_CHECK_TIMEOUT,
            )?,
        })
    }
}

/// Empty values count as unset, like the defaults in the deployment manifests.
fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn secs_or<F>(lookup: &F, var: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = parse_or(lookup, var, default.as_secs())?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: secs.to_string(),
            reason: "must be at least one second".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}
