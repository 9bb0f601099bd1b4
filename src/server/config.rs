//! Environment based application configuration.

use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

/// Default ESI base URL used when `ESI_URL` is not set.
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";
/// Default lifetime of the cached ESI market price table.
pub const DEFAULT_PRICE_CACHE_MINUTES: u64 = 60;

/// Application configuration loaded from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Contact email sent to ESI in the user agent (`CONTACT_EMAIL`)
    pub contact_email: String,
    /// User agent built from the crate version and the contact email
    pub user_agent: String,
    /// ESI base URL (`ESI_URL`)
    pub esi_url: String,
    /// Minutes the market price table is reused before fetching again (`PRICE_CACHE_MINUTES`)
    pub price_cache_minutes: u64,
    /// Maximum log level (`LOG_LEVEL`)
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `CONTACT_EMAIL` not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PRICE_CACHE_MINUTES` or `LOG_LEVEL` unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        let contact_email = required_var("CONTACT_EMAIL")?;
        let user_agent = format!(
            "{}/{} ({}; +{})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email,
            env!("CARGO_PKG_REPOSITORY")
        );

        let price_cache_minutes = match std::env::var("PRICE_CACHE_MINUTES") {
            Ok(value) => match value.parse::<u64>() {
                Ok(minutes) if minutes > 0 => minutes,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PRICE_CACHE_MINUTES".to_string(),
                        reason: "must be a positive number of minutes".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PRICE_CACHE_MINUTES".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            Err(_) => DEFAULT_PRICE_CACHE_MINUTES,
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => Level::from_str(&value).map_err(|e| ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            contact_email,
            user_agent,
            esi_url: std::env::var("ESI_URL").unwrap_or_else(|_| DEFAULT_ESI_URL.to_string()),
            price_cache_minutes,
            log_level,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
