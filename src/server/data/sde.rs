use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    model::schematic::{Schematic, SchematicMaterial},
    planetary::catalog::SdeCatalog,
};

/// Read access to the static data imported from the EVE Online SDE.
pub struct SdeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SdeRepository<'a> {
    /// Creates a new instance of [`SdeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planet schematics
    pub async fn get_schematics(&self) -> Result<Vec<entity::sde_planet_schematic::Model>, DbErr> {
        entity::prelude::SdePlanetSchematic::find()
            .order_by_asc(entity::sde_planet_schematic::Column::SchematicId)
            .all(self.db)
            .await
    }

    /// Gets the input and output materials of all planet schematics
    pub async fn get_schematic_types(
        &self,
    ) -> Result<Vec<entity::sde_planet_schematic_type::Model>, DbErr> {
        entity::prelude::SdePlanetSchematicType::find()
            .order_by_asc(entity::sde_planet_schematic_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all market groups
    pub async fn get_market_groups(&self) -> Result<Vec<entity::sde_market_group::Model>, DbErr> {
        entity::prelude::SdeMarketGroup::find().all(self.db).await
    }

    /// Gets all types
    pub async fn get_types(&self) -> Result<Vec<entity::sde_type::Model>, DbErr> {
        entity::prelude::SdeType::find().all(self.db).await
    }

    /// Loads the full static data catalog used by the planetary calculations.
    ///
    /// Schematics are joined with their materials; a schematic without exactly one output
    /// material is skipped with a warning since no production can be attributed to it.
    ///
    /// # Returns
    /// - `Ok(SdeCatalog)` - Schematics, market group hierarchy and type names
    /// - `Err(DbErr)` - Database query failed
    pub async fn load_catalog(&self) -> Result<SdeCatalog, DbErr> {
        let mut catalog = SdeCatalog::new();

        let mut materials: HashMap<i64, Vec<entity::sde_planet_schematic_type::Model>> =
            HashMap::new();
        for material in self.get_schematic_types().await? {
            materials
                .entry(material.schematic_id)
                .or_default()
                .push(material);
        }

        for schematic in self.get_schematics().await? {
            let schematic_materials = materials.remove(&schematic.schematic_id).unwrap_or_default();
            let (inputs, outputs): (Vec<_>, Vec<_>) = schematic_materials
                .into_iter()
                .partition(|material| material.is_input);

            let [output] = outputs.as_slice() else {
                tracing::warn!(
                    "Skipping schematic {} ({}) with {} output materials",
                    schematic.schematic_id,
                    schematic.name,
                    outputs.len()
                );
                continue;
            };

            catalog.insert_schematic(Schematic {
                schematic_id: schematic.schematic_id,
                name: schematic.name,
                cycle_time_seconds: schematic.cycle_time,
                inputs: inputs
                    .into_iter()
                    .map(|input| SchematicMaterial {
                        type_id: input.type_id,
                        quantity: input.quantity,
                    })
                    .collect(),
                output: SchematicMaterial {
                    type_id: output.type_id,
                    quantity: output.quantity,
                },
            });
        }

        for group in self.get_market_groups().await? {
            catalog.insert_market_group(group.market_group_id, group.parent_group_id);
        }

        for sde_type in self.get_types().await? {
            catalog.insert_type(sde_type.type_id, &sde_type.name, sde_type.market_group_id);
        }

        Ok(catalog)
    }
}
