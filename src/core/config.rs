//! Startup configuration
//!
//! Everything is read once from the process environment (after `.env` has been
//! loaded by `main`) into an immutable [`Config`], which is then handed to the
//! components that need it. Nothing else in the crate reads the environment.

use secrecy::SecretString;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors raised while building the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required key is absent or empty
    #[error("Required configuration key {0} is not set")]
    Missing(&'static str),

    /// A key is present but its value cannot be used
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Backend service defaults
pub mod backend {
    use super::Duration;

    /// Base URL used when BACKEND_URL is not set
    pub const DEFAULT_URL: &str = "http://localhost:8080";

    /// Path of the code issuance endpoint
    pub const KIZS_ENDPOINT: &str = "/api/v1/kizs";

    /// Path of the payment creation endpoint
    pub const PAYMENTS_ENDPOINT: &str = "/api/v1/payments";

    /// Timeout for code requests (in seconds); issuance is slow on the backend side
    pub const CODES_TIMEOUT_SECS: u64 = 30;

    /// Timeout for payment creation (in seconds)
    pub const PAYMENT_TIMEOUT_SECS: u64 = 10;

    pub fn codes_timeout() -> Duration {
        Duration::from_secs(CODES_TIMEOUT_SECS)
    }

    pub fn payment_timeout() -> Duration {
        Duration::from_secs(PAYMENT_TIMEOUT_SECS)
    }
}

/// Relational store defaults
pub mod store {
    pub const DEFAULT_HOST: &str = "localhost";
    pub const DEFAULT_PORT: u16 = 5432;
    pub const DEFAULT_USER: &str = "postgres";
    pub const DEFAULT_DATABASE: &str = "CentralDB";
}

/// Where and how to reach the backend service
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    pub codes_timeout: Duration,
    pub payment_timeout: Duration,
}

impl BackendConfig {
    /// Backend at `base_url` with the default timeouts
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            codes_timeout: backend::codes_timeout(),
            payment_timeout: backend::payment_timeout(),
        }
    }
}

/// PostgreSQL connection settings
///
/// The password has no default: the store refuses to start without one.
#[derive(Debug)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    pub password: Option<SecretString>,
}

/// Process-wide configuration, read-only after startup
#[derive(Debug)]
pub struct Config {
    /// Telegram bot token; only the `run` command needs it
    pub bot_token: Option<SecretString>,
    /// Custom Telegram Bot API server (local bot API)
    pub bot_api_url: Option<Url>,
    pub backend: BackendConfig,
    pub store: StoreConfig,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key).and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELOXIDE_TOKEN"))
            .map(SecretString::from);

        let bot_api_url = get("BOT_API_URL")
            .map(|raw| parse_url("BOT_API_URL", &raw))
            .transpose()?;

        let base_url = parse_url(
            "BACKEND_URL",
            &get("BACKEND_URL").unwrap_or_else(|| backend::DEFAULT_URL.to_string()),
        )?;

        let backend = BackendConfig {
            base_url,
            codes_timeout: parse_secs(
                "BACKEND_CODES_TIMEOUT_SECS",
                get("BACKEND_CODES_TIMEOUT_SECS"),
                backend::CODES_TIMEOUT_SECS,
            )?,
            payment_timeout: parse_secs(
                "BACKEND_PAYMENT_TIMEOUT_SECS",
                get("BACKEND_PAYMENT_TIMEOUT_SECS"),
                backend::PAYMENT_TIMEOUT_SECS,
            )?,
        };

        let port = match get("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "DB_PORT",
                reason: e.to_string(),
            })?,
            None => store::DEFAULT_PORT,
        };

        let store = StoreConfig {
            host: get("DB_HOST").unwrap_or_else(|| store::DEFAULT_HOST.to_string()),
            port,
            user: get("DB_USER").unwrap_or_else(|| store::DEFAULT_USER.to_string()),
            database: get("DB_NAME").unwrap_or_else(|| store::DEFAULT_DATABASE.to_string()),
            password: get("DB_PASSWORD").map(SecretString::from),
        };

        Ok(Self {
            bot_token,
            bot_api_url,
            backend,
            store,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the bot token or the error that must stop startup
    pub fn require_bot_token(&self) -> Result<&SecretString, ConfigError> {
        self.bot_token.as_ref().ok_or(ConfigError::Missing("BOT_TOKEN"))
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn parse_secs(key: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let secs = match raw {
        Some(value) => value.parse::<u64>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })?,
        None => default,
    };
    if secs == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
