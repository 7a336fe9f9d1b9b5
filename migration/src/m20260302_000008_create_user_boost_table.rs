use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_boost_table::Boost;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBoost::Table)
                    .if_not_exists()
                    .col(string(UserBoost::UserId))
                    .col(integer(UserBoost::BoostId))
                    .col(integer(UserBoost::Level).default(0))
                    .col(integer(UserBoost::CardCount).default(0))
                    .col(
                        timestamp_with_time_zone(UserBoost::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(UserBoost::UserId).col(UserBoost::BoostId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_boost_boost_id")
                            .from(UserBoost::Table, UserBoost::BoostId)
                            .to(Boost::Table, Boost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBoost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBoost {
    Table,
    UserId,
    BoostId,
    Level,
    CardCount,
    UpdatedAt,
}
