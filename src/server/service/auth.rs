use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    middleware::session::AuthSession,
    model::{identity::Identity, profile::Profile},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a token-derived identity in the cookie session and records its profile.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile for the identity, created on first login
    /// - `Err(AppError)` - Profile upsert or session write failed
    pub async fn establish_session(
        &self,
        session: &Session,
        identity: &Identity,
    ) -> Result<Profile, AppError> {
        let profile = ProfileRepository::new(self.db)
            .upsert_from_identity(identity)
            .await?;

        AuthSession::new(session).set_identity(identity).await?;

        tracing::info!("Established session for {}", identity.subject);

        Ok(profile)
    }

    /// Whether the identity's profile carries the admin flag.
    ///
    /// Identities without a profile are not admins.
    pub async fn is_admin(&self, identity: &Identity) -> Result<bool, AppError> {
        let profile = ProfileRepository::new(self.db)
            .find_by_id(&identity.subject)
            .await?;

        Ok(profile.is_some_and(|p| p.is_admin))
    }
}
