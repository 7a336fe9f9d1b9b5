//! Ownership repository for per-user catalog progression.
//!
//! Each catalog has its own ownership table keyed by `(user_id, item_id)`. Writes use
//! that composite key as the conflict target, so concurrent updates resolve as
//! last-writer-wins.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::{
    catalog::CatalogKind,
    ownership::{OwnershipRecord, UpsertOwnershipParams},
};

pub struct OwnershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every ownership record a user has for one catalog.
    ///
    /// # Arguments
    /// - `kind` - Catalog the records belong to
    /// - `user_id` - Subject id of the user
    ///
    /// # Returns
    /// - `Ok(Vec<OwnershipRecord>)` - All records for the user, in no particular order
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user(
        &self,
        kind: CatalogKind,
        user_id: &str,
    ) -> Result<Vec<OwnershipRecord>, DbErr> {
        let records = match kind {
            CatalogKind::Driver => entity::prelude::UserDriver::find()
                .filter(entity::user_driver::Column::UserId.eq(user_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(OwnershipRecord::from_user_driver)
                .collect(),
            CatalogKind::CarPart => entity::prelude::UserCarPart::find()
                .filter(entity::user_car_part::Column::UserId.eq(user_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(OwnershipRecord::from_user_car_part)
                .collect(),
            CatalogKind::Boost => entity::prelude::UserBoost::find()
                .filter(entity::user_boost::Column::UserId.eq(user_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(OwnershipRecord::from_user_boost)
                .collect(),
        };

        Ok(records)
    }

    /// Inserts or updates a user's record for one catalog item.
    ///
    /// # Arguments
    /// - `kind` - Catalog the item belongs to
    /// - `params` - User, item and the new level/card count
    ///
    /// # Returns
    /// - `Ok(OwnershipRecord)` - The stored record
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   item does not exist
    pub async fn upsert(
        &self,
        kind: CatalogKind,
        params: UpsertOwnershipParams,
    ) -> Result<OwnershipRecord, DbErr> {
        let now = Utc::now();

        let record = match kind {
            CatalogKind::Driver => {
                use entity::user_driver::{ActiveModel, Column};

                let model = entity::prelude::UserDriver::insert(ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    driver_id: ActiveValue::Set(params.item_id),
                    level: ActiveValue::Set(params.level),
                    card_count: ActiveValue::Set(params.card_count),
                    updated_at: ActiveValue::Set(now),
                })
                .on_conflict(
                    OnConflict::columns([Column::UserId, Column::DriverId])
                        .update_columns([Column::Level, Column::CardCount, Column::UpdatedAt])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

                OwnershipRecord::from_user_driver(model)
            }
            CatalogKind::CarPart => {
                use entity::user_car_part::{ActiveModel, Column};

                let model = entity::prelude::UserCarPart::insert(ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    car_part_id: ActiveValue::Set(params.item_id),
                    level: ActiveValue::Set(params.level),
                    card_count: ActiveValue::Set(params.card_count),
                    updated_at: ActiveValue::Set(now),
                })
                .on_conflict(
                    OnConflict::columns([Column::UserId, Column::CarPartId])
                        .update_columns([Column::Level, Column::CardCount, Column::UpdatedAt])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

                OwnershipRecord::from_user_car_part(model)
            }
            CatalogKind::Boost => {
                use entity::user_boost::{ActiveModel, Column};

                let model = entity::prelude::UserBoost::insert(ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    boost_id: ActiveValue::Set(params.item_id),
                    level: ActiveValue::Set(params.level),
                    card_count: ActiveValue::Set(params.card_count),
                    updated_at: ActiveValue::Set(now),
                })
                .on_conflict(
                    OnConflict::columns([Column::UserId, Column::BoostId])
                        .update_columns([Column::Level, Column::CardCount, Column::UpdatedAt])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

                OwnershipRecord::from_user_boost(model)
            }
        };

        Ok(record)
    }
}
