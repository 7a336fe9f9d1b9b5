use chrono::{DateTime, Utc};

use crate::model::user::BoostCustomNameRowDto;

/// A user's personal label for a boost.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostCustomName {
    pub user_id: String,
    pub boost_id: i32,
    pub custom_name: String,
    pub updated_at: DateTime<Utc>,
}

impl BoostCustomName {
    pub fn from_entity(entity: entity::boost_custom_name::Model) -> Self {
        Self {
            user_id: entity.user_id,
            boost_id: entity.boost_id,
            custom_name: entity.custom_name,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BoostCustomNameRowDto {
        BoostCustomNameRowDto {
            user_id: self.user_id,
            boost_id: self.boost_id,
            custom_name: self.custom_name,
            updated_at: self.updated_at,
        }
    }
}
