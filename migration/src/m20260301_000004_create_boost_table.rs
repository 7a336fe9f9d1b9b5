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
                    .table(Boost::Table)
                    .if_not_exists()
                    .col(pk_auto(Boost::Id))
                    .col(string(Boost::Name))
                    .col(integer(Boost::Rarity))
                    .col(integer(Boost::Series))
                    .col(integer_null(Boost::SeasonId))
                    .col(string(Boost::BoostType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boost_season_id")
                            .from(Boost::Table, Boost::SeasonId)
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
                    .name("idx_boost_name")
                    .table(Boost::Table)
                    .col(Boost::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Boost {
    Table,
    Id,
    Name,
    Rarity,
    Series,
    SeasonId,
    BoostType,
}
