//! Profile repository.
//!
//! Profiles are created the first time an identity establishes a session. The admin
//! flag is only ever set by administrative bootstrap outside this service, so upserts
//! never touch it.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::{identity::Identity, profile::Profile};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a profile by subject id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Creates a profile for the identity or refreshes its email and display name.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created or updated profile
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert_from_identity(&self, identity: &Identity) -> Result<Profile, DbErr> {
        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            id: ActiveValue::Set(identity.subject.clone()),
            email: ActiveValue::Set(identity.email.clone()),
            display_name: ActiveValue::Set(identity.display_name()),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::profile::Column::Id)
                .update_columns([
                    entity::profile::Column::Email,
                    entity::profile::Column::DisplayName,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }
}
