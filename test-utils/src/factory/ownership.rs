//! Ownership record factories for each catalog.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a user_driver row.
pub async fn create_user_driver(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    driver_id: i32,
    level: i32,
    card_count: i32,
) -> Result<entity::user_driver::Model, DbErr> {
    entity::user_driver::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        driver_id: ActiveValue::Set(driver_id),
        level: ActiveValue::Set(level),
        card_count: ActiveValue::Set(card_count),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Inserts a user_car_part row.
pub async fn create_user_car_part(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    car_part_id: i32,
    level: i32,
    card_count: i32,
) -> Result<entity::user_car_part::Model, DbErr> {
    entity::user_car_part::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        car_part_id: ActiveValue::Set(car_part_id),
        level: ActiveValue::Set(level),
        card_count: ActiveValue::Set(card_count),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Inserts a user_boost row.
pub async fn create_user_boost(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    boost_id: i32,
    level: i32,
    card_count: i32,
) -> Result<entity::user_boost::Model, DbErr> {
    entity::user_boost::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        boost_id: ActiveValue::Set(boost_id),
        level: ActiveValue::Set(level),
        card_count: ActiveValue::Set(card_count),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
