//! Driver factory for creating test driver entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let driver = DriverFactory::new(&db)
///     .name("Max")
///     .rarity(4)
///     .min_tier(3)
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rarity: i32,
    series: i32,
    season_id: Option<i32>,
    min_tier: i32,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Driver {id}"` where id is auto-incremented
    /// - rarity: `1`
    /// - series: `1`
    /// - season_id: `None`
    /// - min_tier: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Driver {}", next_id()),
            rarity: 1,
            series: 1,
            season_id: None,
            min_tier: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rarity(mut self, rarity: i32) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn series(mut self, series: i32) -> Self {
        self.series = series;
        self
    }

    pub fn season_id(mut self, season_id: i32) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn min_tier(mut self, min_tier: i32) -> Self {
        self.min_tier = min_tier;
        self
    }

    /// Builds and inserts the driver entity into the database.
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            series: ActiveValue::Set(self.series),
            season_id: ActiveValue::Set(self.season_id),
            min_tier: ActiveValue::Set(self.min_tier),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver with default values.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}
