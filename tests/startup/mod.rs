//! Tests for the application startup helpers.

mod config;

use std::collections::BTreeSet;

use dioxus_logger::tracing::Level;
use pi_ledger::{
    planetary::catalog::PriceOracle,
    server::{config::Config, data::planetary::ColonyRepository, startup},
};
use pi_ledger_test_utils::prelude::*;

fn test_config(database_url: &str, esi_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        contact_email: "contact@example.com".to_string(),
        user_agent: constant::TEST_USER_AGENT.to_string(),
        esi_url: esi_url.to_string(),
        price_cache_minutes: 60,
        log_level: Level::DEBUG,
    }
}

/// Tests connecting to a fresh database.
///
/// Expected: Ok with every migration applied so the colony tables can be queried
#[tokio::test]
async fn connects_and_runs_migrations() -> Result<(), TestError> {
    let config = test_config("sqlite::memory:", "https://esi.evetech.net/latest");
    startup::init_logging(&config);

    let db = startup::connect_to_database(&config).await.unwrap();

    let colonies = ColonyRepository::new(&db)
        .get_many_by_character_id(constant::TEST_CHARACTER_ID)
        .await?;
    assert!(colonies.is_empty());

    let catalog = startup::load_catalog(&db).await.unwrap();
    assert_eq!(catalog.schematic_count(), 0);

    Ok(())
}

/// Tests building the price oracle from configuration.
///
/// Expected: Oracle using the configured ESI URL
#[tokio::test]
async fn builds_price_oracle_from_config() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_market_prices_endpoint(vec![MockMarketPrice::new(constant::WATER_TYPE_ID, 480.0)], 1)
        .build()
        .await?;
    let config = test_config("sqlite::memory:", &test.esi_url());

    let oracle = startup::build_price_oracle(&config).unwrap();
    let prices = oracle
        .get_prices(&BTreeSet::from([constant::WATER_TYPE_ID]))
        .await
        .unwrap();

    assert_eq!(prices[&constant::WATER_TYPE_ID], Some(480.0));

    test.assert_mocks();

    Ok(())
}
