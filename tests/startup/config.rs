//! Tests for Config::from_env.

use std::sync::{Mutex, MutexGuard};

use dioxus_logger::tracing::Level;
use pi_ledger::{
    error::config::ConfigError,
    server::config::{Config, DEFAULT_ESI_URL, DEFAULT_PRICE_CACHE_MINUTES},
};

const CONFIG_VARS: [&str; 5] = [
    "DATABASE_URL",
    "CONTACT_EMAIL",
    "ESI_URL",
    "PRICE_CACHE_MINUTES",
    "LOG_LEVEL",
];

/// Environment variables are process wide, tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Locks the environment and sets exactly the given configuration variables.
fn set_env(vars: &[(&str, &str)]) -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    for var in CONFIG_VARS {
        std::env::remove_var(var);
    }
    for (var, value) in vars {
        std::env::set_var(var, value);
    }

    guard
}

fn required_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("DATABASE_URL", "sqlite::memory:"),
        ("CONTACT_EMAIL", "contact@example.com"),
    ]
}

fn assert_invalid_value(result: Result<Config, ConfigError>, expected_var: &str) {
    match result {
        Err(ConfigError::InvalidEnvValue { var, .. }) => assert_eq!(var, expected_var),
        Err(e) => panic!("expected InvalidEnvValue for {expected_var}, got {e}"),
        Ok(_) => panic!("expected InvalidEnvValue for {expected_var}, got Ok"),
    }
}

/// Tests loading configuration with only the required variables set.
///
/// Expected: Ok with the default ESI URL, price cache lifetime and log level
#[test]
fn uses_defaults_for_optional_vars() {
    let _guard = set_env(&required_vars());

    let config = Config::from_env().unwrap();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.contact_email, "contact@example.com");
    assert!(config.user_agent.contains("contact@example.com"));
    assert!(config.user_agent.starts_with("pi-ledger/"));
    assert_eq!(config.esi_url, DEFAULT_ESI_URL);
    assert_eq!(config.price_cache_minutes, DEFAULT_PRICE_CACHE_MINUTES);
    assert_eq!(config.log_level, Level::INFO);
}

/// Tests loading configuration with every optional variable set.
///
/// Expected: Ok with the provided values
#[test]
fn reads_optional_vars() {
    let mut vars = required_vars();
    vars.extend([
        ("ESI_URL", "http://localhost:8080"),
        ("PRICE_CACHE_MINUTES", "15"),
        ("LOG_LEVEL", "debug"),
    ]);
    let _guard = set_env(&vars);

    let config = Config::from_env().unwrap();

    assert_eq!(config.esi_url, "http://localhost:8080");
    assert_eq!(config.price_cache_minutes, 15);
    assert_eq!(config.log_level, Level::DEBUG);
}

/// Tests loading configuration without a database URL.
///
/// Expected: Err with MissingEnvVar for DATABASE_URL
#[test]
fn fails_without_database_url() {
    let _guard = set_env(&[("CONTACT_EMAIL", "contact@example.com")]);

    let result = Config::from_env();

    assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
}

/// Tests loading configuration without a contact email.
///
/// Expected: Err with MissingEnvVar for CONTACT_EMAIL
#[test]
fn fails_without_contact_email() {
    let _guard = set_env(&[("DATABASE_URL", "sqlite::memory:")]);

    let result = Config::from_env();

    assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "CONTACT_EMAIL"));
}

/// Tests a price cache lifetime of zero minutes.
///
/// Expected: Err with InvalidEnvValue for PRICE_CACHE_MINUTES
#[test]
fn rejects_zero_price_cache_minutes() {
    let mut vars = required_vars();
    vars.push(("PRICE_CACHE_MINUTES", "0"));
    let _guard = set_env(&vars);

    assert_invalid_value(Config::from_env(), "PRICE_CACHE_MINUTES");
}

/// Tests a price cache lifetime that is not a number.
///
/// Expected: Err with InvalidEnvValue for PRICE_CACHE_MINUTES
#[test]
fn rejects_non_numeric_price_cache_minutes() {
    let mut vars = required_vars();
    vars.push(("PRICE_CACHE_MINUTES", "hourly"));
    let _guard = set_env(&vars);

    assert_invalid_value(Config::from_env(), "PRICE_CACHE_MINUTES");
}

/// Tests an unknown log level.
///
/// Expected: Err with InvalidEnvValue for LOG_LEVEL
#[test]
fn rejects_invalid_log_level() {
    let mut vars = required_vars();
    vars.push(("LOG_LEVEL", "verbose"));
    let _guard = set_env(&vars);

    assert_invalid_value(Config::from_env(), "LOG_LEVEL");
}
