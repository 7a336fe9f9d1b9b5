//! Boost custom name repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::custom_name::BoostCustomName;

pub struct BoostCustomNameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoostCustomNameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every custom name a user has set.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<BoostCustomName>, DbErr> {
        let entities = entity::prelude::BoostCustomName::find()
            .filter(entity::boost_custom_name::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BoostCustomName::from_entity).collect())
    }

    /// Gets every custom name across all users, ordered by user then boost.
    pub async fn get_all(&self) -> Result<Vec<BoostCustomName>, DbErr> {
        let entities = entity::prelude::BoostCustomName::find()
            .order_by_asc(entity::boost_custom_name::Column::UserId)
            .order_by_asc(entity::boost_custom_name::Column::BoostId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BoostCustomName::from_entity).collect())
    }

    /// Sets a user's custom name for a boost, replacing any previous one.
    pub async fn upsert(
        &self,
        user_id: &str,
        boost_id: i32,
        custom_name: String,
    ) -> Result<BoostCustomName, DbErr> {
        use entity::boost_custom_name::{ActiveModel, Column};

        let entity = entity::prelude::BoostCustomName::insert(ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            boost_id: ActiveValue::Set(boost_id),
            custom_name: ActiveValue::Set(custom_name),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::BoostId])
                .update_columns([Column::CustomName, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(BoostCustomName::from_entity(entity))
    }

    /// Removes a user's custom name for a boost. Missing rows are not an error.
    pub async fn delete(&self, user_id: &str, boost_id: i32) -> Result<(), DbErr> {
        entity::prelude::BoostCustomName::delete_many()
            .filter(entity::boost_custom_name::Column::UserId.eq(user_id))
            .filter(entity::boost_custom_name::Column::BoostId.eq(boost_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
