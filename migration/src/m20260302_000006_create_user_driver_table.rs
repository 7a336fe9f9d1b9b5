use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_driver_table::Driver;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDriver::Table)
                    .if_not_exists()
                    .col(string(UserDriver::UserId))
                    .col(integer(UserDriver::DriverId))
                    .col(integer(UserDriver::Level).default(0))
                    .col(integer(UserDriver::CardCount).default(0))
                    .col(
                        timestamp_with_time_zone(UserDriver::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(UserDriver::UserId).col(UserDriver::DriverId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_driver_driver_id")
                            .from(UserDriver::Table, UserDriver::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDriver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserDriver {
    Table,
    UserId,
    DriverId,
    Level,
    CardCount,
    UpdatedAt,
}
