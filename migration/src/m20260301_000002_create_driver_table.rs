use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string(Driver::Name))
                    .col(integer(Driver::Rarity))
                    .col(integer(Driver::Series))
                    .col(integer_null(Driver::SeasonId))
                    .col(integer(Driver::MinTier).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_season_id")
                            .from(Driver::Table, Driver::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_driver_name")
                    .table(Driver::Table)
                    .col(Driver::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    Name,
    Rarity,
    Series,
    SeasonId,
    MinTier,
}
