use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SdeMarketGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SdeMarketGroup::Id))
                    .col(big_integer_uniq(SdeMarketGroup::MarketGroupId))
                    .col(big_integer_null(SdeMarketGroup::ParentGroupId))
                    .col(string(SdeMarketGroup::Name))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SdeMarketGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SdeMarketGroup {
    Table,
    Id,
    MarketGroupId,
    ParentGroupId,
    Name,
}
