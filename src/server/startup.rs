//! Application startup helpers.

use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    error::Error,
    planetary::catalog::SdeCatalog,
    server::{config::Config, data::sde::SdeRepository, service::price::EsiPriceOracle},
};

/// Load `.env` if present, then read the configuration from the environment
pub fn load_config() -> Result<Config, Error> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    Ok(Config::from_env()?)
}

/// Initialize the global tracing subscriber at the configured level.
///
/// A subscriber that is already installed (e.g. by a test harness) is kept.
pub fn init_logging(config: &Config) {
    if let Err(e) = dioxus_logger::init(config.log_level) {
        tracing::debug!("Logger already initialized: {}", e);
    }
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Load the static data catalog (schematics, market groups, type names) from the database
pub async fn load_catalog(db: &DatabaseConnection) -> Result<SdeCatalog, Error> {
    let catalog = SdeRepository::new(db).load_catalog().await?;

    tracing::info!("Loaded {} planet schematics", catalog.schematic_count());

    Ok(catalog)
}

/// Build the ESI market price oracle with the configured user agent and cache lifetime
pub fn build_price_oracle(config: &Config) -> Result<EsiPriceOracle, Error> {
    let oracle = EsiPriceOracle::new(&config.esi_url, &config.user_agent)?
        .with_ttl(Duration::from_secs(config.price_cache_minutes * 60));

    Ok(oracle)
}
