//! Tests for PlanetaryService::colony_summaries method.

use pi_ledger::{
    model::status::ColonyStatus,
    planetary::catalog::StaticPriceOracle,
    server::{data::sde::SdeRepository, service::planetary::PlanetaryService},
};

use super::*;

/// Tests summarizing a healthy colony and one with an expired extractor.
///
/// Expected: Active for the first colony, Expired for the second, in planet order
#[tokio::test]
async fn summarizes_colonies_of_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;
    insert_water_colony(&test, 40000001).await?;

    let expired_colony = test
        .planetary()
        .insert_colony(constant::TEST_CHARACTER_ID, 40000002)
        .await?;
    test.planetary()
        .insert_extractor(
            &expired_colony,
            1,
            constant::IONIC_SOLUTIONS_TYPE_ID,
            Some(1800),
            100,
            Some((Utc::now() - Duration::hours(1)).naive_utc()),
        )
        .await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let summaries = planetary_service
        .colony_summaries(constant::TEST_CHARACTER_ID, Utc::now())
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].planet_id, 40000001);
    assert_eq!(summaries[0].status, ColonyStatus::Active);
    assert_eq!(summaries[0].extractor_count, 1);
    assert_eq!(summaries[0].factory_count, 1);
    assert!(summaries[0].nearest_expiry.is_some());
    assert_eq!(summaries[1].planet_id, 40000002);
    assert_eq!(summaries[1].status, ColonyStatus::Expired);
    assert_eq!(summaries[1].expired_extractors, 1);
    assert_eq!(summaries[1].nearest_expiry, None);

    Ok(())
}

/// Tests a character without colonies.
///
/// Expected: Ok with no summaries
#[tokio::test]
async fn returns_empty_for_character_without_colonies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_planetary_tables()
        .with_standard_catalog()
        .build()
        .await?;

    let catalog = SdeRepository::new(&test.db).load_catalog().await?;
    let oracle = StaticPriceOracle::default();
    let planetary_service = PlanetaryService::new(&test.db, &catalog, &oracle);

    let summaries = planetary_service
        .colony_summaries(constant::TEST_CHARACTER_ID, Utc::now())
        .await
        .unwrap();

    assert!(summaries.is_empty());

    Ok(())
}
