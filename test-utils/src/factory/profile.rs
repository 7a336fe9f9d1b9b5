//! Profile factory for creating test account profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles.
///
/// # Example
///
/// ```rust,ignore
/// let admin = ProfileFactory::new(&db)
///     .id("admin-subject")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: Option<String>,
    is_admin: bool,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with id `user-{n}`, email `user-{n}@example.com`
    /// and no admin flag.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            email: Some(format!("user-{}@example.com", id)),
            is_admin: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(None),
            is_admin: ActiveValue::Set(self.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin profile with the given subject id.
pub async fn create_profile(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).id(id).build().await
}

/// Creates an admin profile with the given subject id.
pub async fn create_admin(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).id(id).admin(true).build().await
}
