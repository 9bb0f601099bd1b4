//! Colony fixtures.
//!
//! Rows are inserted as the external colony sync would store them.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{
        BASIC_INDUSTRY_FACILITY_TYPE_ID, EXTRACTOR_CONTROL_UNIT_TYPE_ID, STORAGE_FACILITY_TYPE_ID,
    },
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn planetary(&self) -> PlanetaryFixtures<'_> {
        PlanetaryFixtures { setup: self }
    }
}

pub struct PlanetaryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetaryFixtures<'a> {
    /// Insert a barren colony of a character on a planet
    pub async fn insert_colony(
        &self,
        character_id: i64,
        planet_id: i64,
    ) -> Result<entity::planetary_colony::Model, TestError> {
        let now = Utc::now().naive_utc();

        let colony = entity::planetary_colony::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            planet_type: ActiveValue::Set("barren".to_string()),
            solar_system_id: ActiveValue::Set(30000142),
            upgrade_level: ActiveValue::Set(4),
            last_update: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(colony.insert(&self.setup.db).await?)
    }

    /// Insert an extractor control unit
    ///
    /// # Arguments
    /// - `colony` - Owning colony
    /// - `pin_id` - EVE pin ID
    /// - `product_type_id` - Extracted P0 type
    /// - `cycle_time` - Cycle time in seconds
    /// - `qty_per_cycle` - Units extracted per cycle
    /// - `expiry_time` - End of the extraction program, `None` for no expiry
    pub async fn insert_extractor(
        &self,
        colony: &entity::planetary_colony::Model,
        pin_id: i64,
        product_type_id: i64,
        cycle_time: Option<i64>,
        qty_per_cycle: i64,
        expiry_time: Option<NaiveDateTime>,
    ) -> Result<entity::planetary_pin::Model, TestError> {
        self.insert_pin(entity::planetary_pin::ActiveModel {
            colony_id: ActiveValue::Set(colony.id),
            pin_id: ActiveValue::Set(pin_id),
            type_id: ActiveValue::Set(EXTRACTOR_CONTROL_UNIT_TYPE_ID),
            product_type_id: ActiveValue::Set(Some(product_type_id)),
            cycle_time: ActiveValue::Set(cycle_time),
            qty_per_cycle: ActiveValue::Set(Some(qty_per_cycle)),
            num_heads: ActiveValue::Set(Some(10)),
            expiry_time: ActiveValue::Set(expiry_time),
            ..Default::default()
        })
        .await
    }

    /// Insert a basic industry facility running a schematic
    pub async fn insert_factory(
        &self,
        colony: &entity::planetary_colony::Model,
        pin_id: i64,
        schematic_id: i64,
    ) -> Result<entity::planetary_pin::Model, TestError> {
        self.insert_pin(entity::planetary_pin::ActiveModel {
            colony_id: ActiveValue::Set(colony.id),
            pin_id: ActiveValue::Set(pin_id),
            type_id: ActiveValue::Set(BASIC_INDUSTRY_FACILITY_TYPE_ID),
            schematic_id: ActiveValue::Set(Some(schematic_id)),
            ..Default::default()
        })
        .await
    }

    /// Insert a storage facility with the given capacity in m³
    pub async fn insert_storage(
        &self,
        colony: &entity::planetary_colony::Model,
        pin_id: i64,
        capacity: f64,
    ) -> Result<entity::planetary_pin::Model, TestError> {
        self.insert_pin(entity::planetary_pin::ActiveModel {
            colony_id: ActiveValue::Set(colony.id),
            pin_id: ActiveValue::Set(pin_id),
            type_id: ActiveValue::Set(STORAGE_FACILITY_TYPE_ID),
            capacity: ActiveValue::Set(Some(capacity)),
            ..Default::default()
        })
        .await
    }

    /// Insert stock held by a pin
    pub async fn insert_pin_content(
        &self,
        pin: &entity::planetary_pin::Model,
        type_id: i64,
        amount: i64,
    ) -> Result<entity::planetary_pin_content::Model, TestError> {
        let content = entity::planetary_pin_content::ActiveModel {
            pin_id: ActiveValue::Set(pin.id),
            type_id: ActiveValue::Set(type_id),
            amount: ActiveValue::Set(amount),
            ..Default::default()
        };

        Ok(content.insert(&self.setup.db).await?)
    }

    /// Insert a route between two pins of a colony
    ///
    /// # Arguments
    /// - `waypoints` - Comma separated pin IDs, stored as-is
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_route(
        &self,
        colony: &entity::planetary_colony::Model,
        route_id: i64,
        source_pin_id: i64,
        destination_pin_id: i64,
        content_type_id: i64,
        quantity: i64,
        waypoints: Option<&str>,
    ) -> Result<entity::planetary_route::Model, TestError> {
        let now = Utc::now().naive_utc();

        let route = entity::planetary_route::ActiveModel {
            colony_id: ActiveValue::Set(colony.id),
            route_id: ActiveValue::Set(route_id),
            source_pin_id: ActiveValue::Set(source_pin_id),
            destination_pin_id: ActiveValue::Set(destination_pin_id),
            content_type_id: ActiveValue::Set(content_type_id),
            quantity: ActiveValue::Set(quantity),
            waypoints: ActiveValue::Set(waypoints.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(route.insert(&self.setup.db).await?)
    }

    async fn insert_pin(
        &self,
        mut pin: entity::planetary_pin::ActiveModel,
    ) -> Result<entity::planetary_pin::Model, TestError> {
        let now = Utc::now().naive_utc();

        pin.created_at = ActiveValue::Set(now);
        pin.updated_at = ActiveValue::Set(now);

        Ok(pin.insert(&self.setup.db).await?)
    }
}
