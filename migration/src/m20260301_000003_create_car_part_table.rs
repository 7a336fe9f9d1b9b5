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
                    .table(CarPart::Table)
                    .if_not_exists()
                    .col(pk_auto(CarPart::Id))
                    .col(string(CarPart::Name))
                    .col(integer(CarPart::Rarity))
                    .col(integer(CarPart::Series))
                    .col(integer_null(CarPart::SeasonId))
                    .col(string(CarPart::PartType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_part_season_id")
                            .from(CarPart::Table, CarPart::SeasonId)
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
                    .name("idx_car_part_name")
                    .table(CarPart::Table)
                    .col(CarPart::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarPart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarPart {
    Table,
    Id,
    Name,
    Rarity,
    Series,
    SeasonId,
    PartType,
}
