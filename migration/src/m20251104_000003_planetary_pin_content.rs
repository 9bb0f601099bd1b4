use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251104_000002_planetary_pin::PlanetaryPin;

static IDX_PLANETARY_PIN_CONTENT_PIN_ID: &str = "idx-planetary_pin_content-pin_id";
static FK_PLANETARY_PIN_CONTENT_PIN_ID: &str = "fk-planetary_pin_content-pin_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetaryPinContent::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetaryPinContent::Id))
                    .col(integer(PlanetaryPinContent::PinId))
                    .col(big_integer(PlanetaryPinContent::TypeId))
                    .col(big_integer(PlanetaryPinContent::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETARY_PIN_CONTENT_PIN_ID)
                            .from(PlanetaryPinContent::Table, PlanetaryPinContent::PinId)
                            .to(PlanetaryPin::Table, PlanetaryPin::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETARY_PIN_CONTENT_PIN_ID)
                    .table(PlanetaryPinContent::Table)
                    .col(PlanetaryPinContent::PinId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETARY_PIN_CONTENT_PIN_ID)
                    .table(PlanetaryPinContent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetaryPinContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanetaryPinContent {
    Table,
    Id,
    PinId,
    TypeId,
    Amount,
}
