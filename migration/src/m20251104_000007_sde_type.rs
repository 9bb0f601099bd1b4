use sea_orm_migration::{prelude::*, schema::*};

static IDX_SDE_TYPE_MARKET_GROUP_ID: &str = "idx-sde_type-market_group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SdeType::Table)
                    .if_not_exists()
                    .col(pk_auto(SdeType::Id))
                    .col(big_integer_uniq(SdeType::TypeId))
                    .col(string(SdeType::Name))
                    .col(big_integer_null(SdeType::MarketGroupId))
                    .col(double_null(SdeType::Volume))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SDE_TYPE_MARKET_GROUP_ID)
                    .table(SdeType::Table)
                    .col(SdeType::MarketGroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SDE_TYPE_MARKET_GROUP_ID)
                    .table(SdeType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SdeType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SdeType {
    Table,
    Id,
    TypeId,
    Name,
    MarketGroupId,
    Volume,
}
