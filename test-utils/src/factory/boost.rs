//! Boost factory for creating test boost entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default boost type for factory-created boosts.
pub const DEFAULT_BOOST_TYPE: &str = "overtake";

pub struct BoostFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rarity: i32,
    series: i32,
    season_id: Option<i32>,
    boost_type: String,
}

impl<'a> BoostFactory<'a> {
    /// Creates a new BoostFactory named `Boost {n}` with rarity 1, series 1 and
    /// boost type `overtake`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Boost {}", next_id()),
            rarity: 1,
            series: 1,
            season_id: None,
            boost_type: DEFAULT_BOOST_TYPE.to_string(),
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

    pub fn boost_type(mut self, boost_type: impl Into<String>) -> Self {
        self.boost_type = boost_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::boost::Model, DbErr> {
        entity::boost::ActiveModel {
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            series: ActiveValue::Set(self.series),
            season_id: ActiveValue::Set(self.season_id),
            boost_type: ActiveValue::Set(self.boost_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boost with default values.
pub async fn create_boost(db: &DatabaseConnection) -> Result<entity::boost::Model, DbErr> {
    BoostFactory::new(db).build().await
}
