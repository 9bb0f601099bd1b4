use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLANETARY_COLONY_CHARACTER_PLANET: &str = "idx-planetary_colony-character_id-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetaryColony::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetaryColony::Id))
                    .col(big_integer(PlanetaryColony::CharacterId))
                    .col(big_integer(PlanetaryColony::PlanetId))
                    .col(string(PlanetaryColony::PlanetType))
                    .col(big_integer(PlanetaryColony::SolarSystemId))
                    .col(integer(PlanetaryColony::UpgradeLevel))
                    .col(timestamp(PlanetaryColony::LastUpdate))
                    .col(timestamp(PlanetaryColony::CreatedAt))
                    .col(timestamp(PlanetaryColony::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETARY_COLONY_CHARACTER_PLANET)
                    .table(PlanetaryColony::Table)
                    .col(PlanetaryColony::CharacterId)
                    .col(PlanetaryColony::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETARY_COLONY_CHARACTER_PLANET)
                    .table(PlanetaryColony::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetaryColony::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanetaryColony {
    Table,
    Id,
    CharacterId,
    PlanetId,
    PlanetType,
    SolarSystemId,
    UpgradeLevel,
    LastUpdate,
    CreatedAt,
    UpdatedAt,
}
