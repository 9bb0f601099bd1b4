mod colony_summaries;
mod production_report;
mod storage_flow;

use chrono::{Duration, Utc};
use pi_ledger_test_utils::prelude::*;

/// Inserts a colony with a running extractor feeding Aqueous Liquids into a storage facility,
/// a Water factory drawing from the storage, and storage stock of 1000 Aqueous Liquids.
///
/// Pins: extractor 1, factory 2, storage 10
async fn insert_water_colony(
    test: &TestContext,
    planet_id: i64,
) -> Result<entity::planetary_colony::Model, TestError> {
    let planetary = test.planetary();

    let colony = planetary
        .insert_colony(constant::TEST_CHARACTER_ID, planet_id)
        .await?;
    planetary
        .insert_extractor(
            &colony,
            1,
            constant::AQUEOUS_LIQUIDS_TYPE_ID,
            Some(1800),
            100,
            Some((Utc::now() + Duration::days(3)).naive_utc()),
        )
        .await?;
    planetary
        .insert_factory(&colony, 2, constant::WATER_SCHEMATIC_ID)
        .await?;
    let storage = planetary.insert_storage(&colony, 10, 12000.0).await?;
    planetary
        .insert_pin_content(&storage, constant::AQUEOUS_LIQUIDS_TYPE_ID, 1000)
        .await?;
    planetary
        .insert_route(
            &colony,
            1,
            1,
            10,
            constant::AQUEOUS_LIQUIDS_TYPE_ID,
            100,
            None,
        )
        .await?;
    planetary
        .insert_route(
            &colony,
            2,
            10,
            2,
            constant::AQUEOUS_LIQUIDS_TYPE_ID,
            3000,
            None,
        )
        .await?;

    Ok(colony)
}
