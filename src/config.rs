// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::infrastructure::security::token::MIN_SIGNING_KEY_LEN;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    database_url: Option<String>,
    token_signing_key: String,
    token_ttl: Duration,
    store_timeout: Duration,
    allowed_origins: Vec<String>,
    cookie_secure: bool,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".into()
}

fn default_token_ttl() -> u64 {
    60 * 60 * 24
}

fn default_store_timeout_ms() -> u64 {
    2000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["https://localhost:5173".into()]
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_positive(name: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::Invalid(format!(
            "{name} must be a positive integer, got '{raw}'"
        ))),
        Ok(parsed) => Ok(parsed),
    }
}

impl AppConfig {
    /// Build configuration from the process environment. Loading a `.env`
    /// file is left to the binary.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let token_signing_key =
            lookup("TOKEN_SIGNING_KEY").ok_or(ConfigError::Missing("TOKEN_SIGNING_KEY"))?;
        if token_signing_key.len() < MIN_SIGNING_KEY_LEN {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SIGNING_KEY must be at least {MIN_SIGNING_KEY_LEN} bytes"
            )));
        }

        let token_ttl_secs = parse_positive(
            "TOKEN_TTL_SECONDS",
            lookup("TOKEN_TTL_SECONDS"),
            default_token_ttl(),
        )?;
        let store_timeout_ms = parse_positive(
            "STORE_TIMEOUT_MS",
            lookup("STORE_TIMEOUT_MS"),
            default_store_timeout_ms(),
        )?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let cookie_secure = lookup("COOKIE_SECURE").is_some_and(|v| parse_flag(&v));
        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED").is_none_or(|v| parse_flag(&v));

        Ok(Self {
            listen_addr,
            database_url,
            token_signing_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            store_timeout: Duration::from_millis(store_timeout_ms),
            allowed_origins,
            cookie_secure,
            rate_limit_enabled,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// `None` selects the in-memory stores.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn token_signing_key(&self) -> &[u8] {
        self.token_signing_key.as_bytes()
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
