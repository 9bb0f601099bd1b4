//! Error types for the planetary production model.
//!
//! Domain-specific failures live in their own enums and are aggregated into [`Error`] with
//! `thiserror`'s `#[from]` so the `?` operator converts them automatically. Missing catalog
//! entries, missing prices and missing expiry timestamps are not errors; the calculators model
//! them as excluded or unknown contributions. What does surface here are structural problems
//! in the supplied data and failures of the external adapters.

pub mod planetary;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod price;

use thiserror::Error;

use crate::error::planetary::PlanetaryError;

#[cfg(feature = "server")]
use crate::error::{config::ConfigError, price::PriceError};

/// Main error type for the crate.
///
/// # Error Categories
/// - Planetary data integrity errors (routes referencing unknown pins, unknown storage pins)
/// - Configuration errors (missing/invalid environment variables)
/// - Price oracle errors (ESI market price lookups)
/// - External library errors (database, HTTP client)
#[derive(Error, Debug)]
pub enum Error {
    /// Colony data violates a structural invariant of the data model.
    #[error(transparent)]
    PlanetaryError(#[from] PlanetaryError),
    /// Configuration error (missing or invalid environment variables).
    #[cfg(feature = "server")]
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Price oracle failed to produce a price table.
    #[cfg(feature = "server")]
    #[error(transparent)]
    PriceError(#[from] PriceError),
    /// Database error (query failures, connection issues, constraint violations).
    #[cfg(feature = "server")]
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error (connection failures, response decoding).
    #[cfg(feature = "server")]
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
