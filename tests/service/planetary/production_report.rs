//! Tests for PlanetaryService::production_report and total_daily_isk methods.

use pi_ledger::{
    error::Error,
    model::tier::Tier,
    server::{
        data::sde::SdeRepository,
        service::{planetary::PlanetaryService, price::EsiPriceOracle},
    },
};

use super::*;

/// Tests the production report of a character with one colony.
///
/// The extractor yields 4800 Aqueous Liquids a day and the factory 960 Water a day.
///
/// Expected: P0 and P1 sections valued with ESI prices, one price request
#[tokio::test]
async fn reports_production_of_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .with_market_prices_endpoint(
            vec![
                MockMarketPrice::new(constant::AQUEOUS_LIQUIDS_TYPE_ID, 10.0),
                MockMarketPrice::new(constant::WATER_TYPE_ID, 480.0),
            ],
            1,
        )
        .build()
        .await?;
    insert_water_colony(&test, 40000001).await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = EsiPriceOracle::new(&test.esi_url(), constant::TEST_USER_AGENT).unwrap();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let report = planetary_service
        .production_report(constant::TEST_CHARACTER_ID, Utc::now())
        .await
        .unwrap();

    assert_eq!(report.tiers.len(), 2);
    assert_eq!(report.tiers[0].tier, Tier::P0);
    assert_eq!(report.tiers[0].items[0].type_name, "Aqueous Liquids");
    assert_eq!(report.tiers[0].items[0].daily_quantity, 4800.0);
    assert_eq!(report.tiers[0].daily_isk_value, 48000.0);
    assert_eq!(report.tiers[1].tier, Tier::P1);
    assert_eq!(report.tiers[1].items[0].daily_quantity, 960.0);
    assert_eq!(report.tiers[1].daily_isk_value, 460800.0);
    assert_eq!(report.total_daily_isk, 508800.0);
    assert_eq!(report.total_monthly_isk, 508800.0 * 30.0);

    test.assert_mocks();

    Ok(())
}

/// Tests the daily ISK total across several colonies.
///
/// Expected: twice the single colony value, still one price request
#[tokio::test]
async fn totals_daily_isk_across_colonies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .with_market_prices_endpoint(
            vec![
                MockMarketPrice::new(constant::AQUEOUS_LIQUIDS_TYPE_ID, 10.0),
                MockMarketPrice::new(constant::WATER_TYPE_ID, 480.0),
            ],
            1,
        )
        .build()
        .await?;
    insert_water_colony(&test, 40000001).await?;
    insert_water_colony(&test, 40000002).await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = EsiPriceOracle::new(&test.esi_url(), constant::TEST_USER_AGENT).unwrap();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let total = planetary_service
        .total_daily_isk(constant::TEST_CHARACTER_ID, Utc::now())
        .await
        .unwrap();

    assert_eq!(total, 2.0 * 508800.0);

    test.assert_mocks();

    Ok(())
}

/// Tests a character without colonies.
///
/// Expected: empty report without contacting ESI
#[tokio::test]
async fn skips_prices_for_character_without_colonies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .with_market_prices_endpoint(Vec::new(), 0)
        .build()
        .await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = EsiPriceOracle::new(&test.esi_url(), constant::TEST_USER_AGENT).unwrap();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let report = planetary_service
        .production_report(constant::TEST_CHARACTER_ID, Utc::now())
        .await
        .unwrap();

    assert!(report.tiers.is_empty());
    assert_eq!(report.total_daily_isk, 0.0);

    test.assert_mocks();

    Ok(())
}

/// Tests error propagation when the colony tables are missing.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standard_catalog().build().await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = EsiPriceOracle::new(&test.esi_url(), constant::TEST_USER_AGENT).unwrap();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let result = planetary_service
        .production_report(constant::TEST_CHARACTER_ID, Utc::now())
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
