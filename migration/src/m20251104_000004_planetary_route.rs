use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251104_000001_planetary_colony::PlanetaryColony;

static IDX_PLANETARY_ROUTE_COLONY_ID: &str = "idx-planetary_route-colony_id";
static FK_PLANETARY_ROUTE_COLONY_ID: &str = "fk-planetary_route-colony_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetaryRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetaryRoute::Id))
                    .col(integer(PlanetaryRoute::ColonyId))
                    .col(big_integer(PlanetaryRoute::RouteId))
                    .col(big_integer(PlanetaryRoute::SourcePinId))
                    .col(big_integer(PlanetaryRoute::DestinationPinId))
                    .col(big_integer(PlanetaryRoute::ContentTypeId))
                    .col(big_integer(PlanetaryRoute::Quantity))
                    .col(text_null(PlanetaryRoute::Waypoints))
                    .col(timestamp(PlanetaryRoute::CreatedAt))
                    .col(timestamp(PlanetaryRoute::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETARY_ROUTE_COLONY_ID)
                            .from(PlanetaryRoute::Table, PlanetaryRoute::ColonyId)
                            .to(PlanetaryColony::Table, PlanetaryColony::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETARY_ROUTE_COLONY_ID)
                    .table(PlanetaryRoute::Table)
                    .col(PlanetaryRoute::ColonyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETARY_ROUTE_COLONY_ID)
                    .table(PlanetaryRoute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetaryRoute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanetaryRoute {
    Table,
    Id,
    ColonyId,
    RouteId,
    SourcePinId,
    DestinationPinId,
    ContentTypeId,
    Quantity,
    Waypoints,
    CreatedAt,
    UpdatedAt,
}
