//! Static data fixtures.

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::*, error::TestError, TestContext};

impl TestContext {
    pub fn sde(&self) -> SdeFixtures<'_> {
        SdeFixtures { setup: self }
    }
}

pub struct SdeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SdeFixtures<'a> {
    pub async fn insert_market_group(
        &self,
        market_group_id: i64,
        parent_group_id: Option<i64>,
        name: &str,
    ) -> Result<entity::sde_market_group::Model, TestError> {
        let group = entity::sde_market_group::ActiveModel {
            market_group_id: ActiveValue::Set(market_group_id),
            parent_group_id: ActiveValue::Set(parent_group_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(group.insert(&self.setup.db).await?)
    }

    pub async fn insert_type(
        &self,
        type_id: i64,
        name: &str,
        market_group_id: Option<i64>,
        volume: f64,
    ) -> Result<entity::sde_type::Model, TestError> {
        let sde_type = entity::sde_type::ActiveModel {
            type_id: ActiveValue::Set(type_id),
            name: ActiveValue::Set(name.to_string()),
            market_group_id: ActiveValue::Set(market_group_id),
            volume: ActiveValue::Set(Some(volume)),
            ..Default::default()
        };

        Ok(sde_type.insert(&self.setup.db).await?)
    }

    /// Insert a schematic with its input and output materials
    ///
    /// # Arguments
    /// - `inputs` - `(type_id, quantity)` pairs consumed per cycle
    /// - `output` - `(type_id, quantity)` produced per cycle
    pub async fn insert_schematic(
        &self,
        schematic_id: i64,
        name: &str,
        cycle_time: i64,
        inputs: &[(i64, i64)],
        output: (i64, i64),
    ) -> Result<entity::sde_planet_schematic::Model, TestError> {
        let schematic = entity::sde_planet_schematic::ActiveModel {
            schematic_id: ActiveValue::Set(schematic_id),
            name: ActiveValue::Set(name.to_string()),
            cycle_time: ActiveValue::Set(cycle_time),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        let materials = inputs
            .iter()
            .map(|input| (*input, true))
            .chain(std::iter::once((output, false)));

        for ((type_id, quantity), is_input) in materials {
            entity::sde_planet_schematic_type::ActiveModel {
                schematic_id: ActiveValue::Set(schematic_id),
                type_id: ActiveValue::Set(type_id),
                quantity: ActiveValue::Set(quantity),
                is_input: ActiveValue::Set(is_input),
                ..Default::default()
            }
            .insert(&self.setup.db)
            .await?;
        }

        Ok(schematic)
    }

    /// Insert the standard test catalog.
    ///
    /// Market groups: Planetary Materials (1332) with Raw Planetary Materials (1333) and the
    /// tier roots 1334-1337 below it. Types: Aqueous Liquids and Ionic Solutions (P0), Water and
    /// Electrolytes (P1), Coolant (P2). Schematics: Water (121), Electrolytes (127) and
    /// Coolant (66).
    pub async fn insert_standard_catalog(&self) -> Result<(), TestError> {
        self.insert_market_group(PLANETARY_MATERIALS_GROUP_ID, None, "Planetary Materials")
            .await?;
        for (group_id, name) in [
            (RAW_MATERIALS_GROUP_ID, "Raw Planetary Materials"),
            (P1_GROUP_ID, "Processed Planetary Materials"),
            (P2_GROUP_ID, "Refined Planetary Materials"),
            (P3_GROUP_ID, "Specialized Planetary Materials"),
            (P4_GROUP_ID, "Advanced Planetary Materials"),
        ] {
            self.insert_market_group(group_id, Some(PLANETARY_MATERIALS_GROUP_ID), name)
                .await?;
        }

        self.insert_type(
            AQUEOUS_LIQUIDS_TYPE_ID,
            "Aqueous Liquids",
            Some(RAW_MATERIALS_GROUP_ID),
            0.01,
        )
        .await?;
        self.insert_type(
            IONIC_SOLUTIONS_TYPE_ID,
            "Ionic Solutions",
            Some(RAW_MATERIALS_GROUP_ID),
            0.01,
        )
        .await?;
        self.insert_type(WATER_TYPE_ID, "Water", Some(P1_GROUP_ID), 0.38)
            .await?;
        self.insert_type(ELECTROLYTES_TYPE_ID, "Electrolytes", Some(P1_GROUP_ID), 0.38)
            .await?;
        self.insert_type(COOLANT_TYPE_ID, "Coolant", Some(P2_GROUP_ID), 1.5)
            .await?;

        self.insert_schematic(
            WATER_SCHEMATIC_ID,
            "Water",
            1800,
            &[(AQUEOUS_LIQUIDS_TYPE_ID, 3000)],
            (WATER_TYPE_ID, 20),
        )
        .await?;
        self.insert_schematic(
            ELECTROLYTES_SCHEMATIC_ID,
            "Electrolytes",
            1800,
            &[(IONIC_SOLUTIONS_TYPE_ID, 3000)],
            (ELECTROLYTES_TYPE_ID, 20),
        )
        .await?;
        self.insert_schematic(
            COOLANT_SCHEMATIC_ID,
            "Coolant",
            3600,
            &[(WATER_TYPE_ID, 40), (ELECTROLYTES_TYPE_ID, 40)],
            (COOLANT_TYPE_ID, 5),
        )
        .await?;

        Ok(())
    }
}
