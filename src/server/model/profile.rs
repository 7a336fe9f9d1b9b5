use crate::model::user::UserDto;

/// Persisted account profile for an identity subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub is_admin: bool,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            is_admin: entity.is_admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            is_admin: self.is_admin,
        }
    }
}
