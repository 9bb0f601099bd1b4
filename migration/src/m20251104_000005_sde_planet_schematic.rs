use sea_orm_migration::{prelude::*, schema::*};

static IDX_SDE_PLANET_SCHEMATIC_TYPE_SCHEMATIC_ID: &str =
    "idx-sde_planet_schematic_type-schematic_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SdePlanetSchematic::Table)
                    .if_not_exists()
                    .col(pk_auto(SdePlanetSchematic::Id))
                    .col(big_integer_uniq(SdePlanetSchematic::SchematicId))
                    .col(string(SdePlanetSchematic::Name))
                    .col(big_integer(SdePlanetSchematic::CycleTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SdePlanetSchematicType::Table)
                    .if_not_exists()
                    .col(pk_auto(SdePlanetSchematicType::Id))
                    .col(big_integer(SdePlanetSchematicType::SchematicId))
                    .col(big_integer(SdePlanetSchematicType::TypeId))
                    .col(big_integer(SdePlanetSchematicType::Quantity))
                    .col(boolean(SdePlanetSchematicType::IsInput))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SDE_PLANET_SCHEMATIC_TYPE_SCHEMATIC_ID)
                    .table(SdePlanetSchematicType::Table)
                    .col(SdePlanetSchematicType::SchematicId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SDE_PLANET_SCHEMATIC_TYPE_SCHEMATIC_ID)
                    .table(SdePlanetSchematicType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SdePlanetSchematicType::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SdePlanetSchematic::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SdePlanetSchematic {
    Table,
    Id,
    SchematicId,
    Name,
    CycleTime,
}

#[derive(DeriveIden)]
pub enum SdePlanetSchematicType {
    Table,
    Id,
    SchematicId,
    TypeId,
    Quantity,
    IsInput,
}
