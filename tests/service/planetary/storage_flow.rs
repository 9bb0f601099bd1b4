//! Tests for PlanetaryService::storage_flow method.

use pi_ledger::{
    error::{planetary::PlanetaryError, Error},
    model::tier::Tier,
    planetary::catalog::StaticPriceOracle,
    server::{data::sde::SdeRepository, service::planetary::PlanetaryService},
};

use super::*;

/// Tests the flow through a storage facility fed by an extractor and drained by a factory.
///
/// Incoming: 4800 Aqueous Liquids a day (48 m³). Outgoing: 3000 per 30 minute factory cycle,
/// 144000 a day (1440 m³).
///
/// Expected: net -1392 m³ a day, no fill days, 10 m³ currently stored
#[tokio::test]
async fn analyzes_storage_of_colony() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;
    insert_water_colony(&test, 40000001).await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let report = planetary_service
        .storage_flow(constant::TEST_CHARACTER_ID, 40000001, 10)
        .await
        .unwrap();

    assert_eq!(report.pin_id, 10);
    assert_eq!(report.incoming.len(), 1);
    assert_eq!(report.incoming[0].tier, Tier::P0);
    assert_eq!(report.incoming[0].daily_quantity, Some(4800.0));
    assert_eq!(report.outgoing.len(), 1);
    assert_eq!(report.outgoing[0].cycle_time_seconds, Some(1800));
    assert_eq!(report.outgoing[0].daily_quantity, Some(144000.0));
    assert_eq!(report.net_daily_volume, Some(-1392.0));
    assert_eq!(report.fill_days, None);
    assert_eq!(report.capacity, Some(12000.0));
    assert_eq!(report.stored_volume, 10.0);

    Ok(())
}

/// Tests analyzing a planet the character has no colony on.
///
/// Expected: Err with ColonyNotFound
#[tokio::test]
async fn fails_for_unknown_colony() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let result = planetary_service
        .storage_flow(constant::TEST_CHARACTER_ID, 40000001, 10)
        .await;

    assert!(matches!(
        result,
        Err(Error::PlanetaryError(PlanetaryError::ColonyNotFound {
            planet_id: 40000001,
            ..
        }))
    ));

    Ok(())
}

/// Tests analyzing a pin that is not part of the colony.
///
/// Expected: Err with PinNotFound
#[tokio::test]
async fn fails_for_unknown_pin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;
    insert_water_colony(&test, 40000001).await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let result = planetary_service
        .storage_flow(constant::TEST_CHARACTER_ID, 40000001, 999)
        .await;

    assert!(matches!(
        result,
        Err(Error::PlanetaryError(PlanetaryError::PinNotFound { pin_id: 999, .. }))
    ));

    Ok(())
}

/// Tests analyzing a colony whose stored route points at a missing pin.
///
/// Expected: Err with DataIntegrity
#[tokio::test]
async fn fails_for_inconsistent_colony() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;
    let colony = insert_water_colony(&test, 40000001).await?;
    test.planetary()
        .insert_route(&colony, 3, 10, 42, constant::AQUEOUS_LIQUIDS_TYPE_ID, 10, None)
        .await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let result = planetary_service
        .storage_flow(constant::TEST_CHARACTER_ID, 40000001, 10)
        .await;

    assert!(matches!(
        result,
        Err(Error::PlanetaryError(PlanetaryError::DataIntegrity { .. }))
    ));

    Ok(())
}
