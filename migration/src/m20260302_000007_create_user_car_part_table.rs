use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_car_part_table::CarPart;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCarPart::Table)
                    .if_not_exists()
                    .col(string(UserCarPart::UserId))
                    .col(integer(UserCarPart::CarPartId))
                    .col(integer(UserCarPart::Level).default(0))
                    .col(integer(UserCarPart::CardCount).default(0))
                    .col(
                        timestamp_with_time_zone(UserCarPart::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(UserCarPart::UserId).col(UserCarPart::CarPartId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_car_part_car_part_id")
                            .from(UserCarPart::Table, UserCarPart::CarPartId)
                            .to(CarPart::Table, CarPart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCarPart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserCarPart {
    Table,
    UserId,
    CarPartId,
    Level,
    CardCount,
    UpdatedAt,
}
