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
                    .table(BoostCustomName::Table)
                    .if_not_exists()
                    .col(string(BoostCustomName::UserId))
                    .col(integer(BoostCustomName::BoostId))
                    .col(string(BoostCustomName::CustomName))
                    .col(
                        timestamp_with_time_zone(BoostCustomName::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BoostCustomName::UserId)
                            .col(BoostCustomName::BoostId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boost_custom_name_boost_id")
                            .from(BoostCustomName::Table, BoostCustomName::BoostId)
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
            .drop_table(Table::drop().table(BoostCustomName::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoostCustomName {
    Table,
    UserId,
    BoostId,
    CustomName,
    UpdatedAt,
}
