use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251104_000001_planetary_colony::PlanetaryColony;

static IDX_PLANETARY_PIN_COLONY_ID: &str = "idx-planetary_pin-colony_id";
static FK_PLANETARY_PIN_COLONY_ID: &str = "fk-planetary_pin-colony_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetaryPin::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetaryPin::Id))
                    .col(integer(PlanetaryPin::ColonyId))
                    .col(big_integer(PlanetaryPin::PinId))
                    .col(big_integer(PlanetaryPin::TypeId))
                    .col(big_integer_null(PlanetaryPin::ProductTypeId))
                    .col(big_integer_null(PlanetaryPin::CycleTime))
                    .col(big_integer_null(PlanetaryPin::QtyPerCycle))
                    .col(integer_null(PlanetaryPin::NumHeads))
                    .col(timestamp_null(PlanetaryPin::InstallTime))
                    .col(timestamp_null(PlanetaryPin::ExpiryTime))
                    .col(timestamp_null(PlanetaryPin::LastCycleStart))
                    .col(big_integer_null(PlanetaryPin::SchematicId))
                    .col(double_null(PlanetaryPin::Capacity))
                    .col(timestamp(PlanetaryPin::CreatedAt))
                    .col(timestamp(PlanetaryPin::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETARY_PIN_COLONY_ID)
                            .from(PlanetaryPin::Table, PlanetaryPin::ColonyId)
                            .to(PlanetaryColony::Table, PlanetaryColony::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETARY_PIN_COLONY_ID)
                    .table(PlanetaryPin::Table)
                    .col(PlanetaryPin::ColonyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETARY_PIN_COLONY_ID)
                    .table(PlanetaryPin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetaryPin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanetaryPin {
    Table,
    Id,
    ColonyId,
    PinId,
    TypeId,
    ProductTypeId,
    CycleTime,
    QtyPerCycle,
    NumHeads,
    InstallTime,
    ExpiryTime,
    LastCycleStart,
    SchematicId,
    Capacity,
    CreatedAt,
    UpdatedAt,
}
