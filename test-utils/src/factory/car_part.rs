//! Car part factory for creating test car part entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default part type for factory-created car parts.
pub const DEFAULT_PART_TYPE: &str = "brakes";

pub struct CarPartFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rarity: i32,
    series: i32,
    season_id: Option<i32>,
    part_type: String,
}

impl<'a> CarPartFactory<'a> {
    /// Creates a new CarPartFactory named `Part {n}` with rarity 1, series 1 and
    /// part type `brakes`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Part {}", next_id()),
            rarity: 1,
            series: 1,
            season_id: None,
            part_type: DEFAULT_PART_TYPE.to_string(),
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

    pub fn part_type(mut self, part_type: impl Into<String>) -> Self {
        self.part_type = part_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::car_part::Model, DbErr> {
        entity::car_part::ActiveModel {
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            series: ActiveValue::Set(self.series),
            season_id: ActiveValue::Set(self.season_id),
            part_type: ActiveValue::Set(self.part_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car part with default values.
pub async fn create_car_part(db: &DatabaseConnection) -> Result<entity::car_part::Model, DbErr> {
    CarPartFactory::new(db).build().await
}
