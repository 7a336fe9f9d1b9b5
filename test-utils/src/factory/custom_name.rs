//! Boost custom name factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a custom name for a user's boost.
pub async fn create_custom_name(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    boost_id: i32,
    custom_name: impl Into<String>,
) -> Result<entity::boost_custom_name::Model, DbErr> {
    entity::boost_custom_name::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        boost_id: ActiveValue::Set(boost_id),
        custom_name: ActiveValue::Set(custom_name.into()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
