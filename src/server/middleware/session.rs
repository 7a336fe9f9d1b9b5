//! Type-safe session management wrapper.
//!
//! The cookie session carries at most one value relevant to this service: the
//! identity established through `POST /api/auth/session`. Keeping the key and the
//! stored type in one place prevents typos and keeps the stored shape consistent.

use tower_sessions::Session;

use crate::server::{error::AppError, model::identity::Identity};

const SESSION_AUTH_IDENTITY: &str = "auth:identity";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the identity in the session, replacing any previous one.
    ///
    /// The session id is cycled first so a session established before login cannot
    /// be reused to ride on the new identity.
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_IDENTITY, identity.clone())
            .await?;
        Ok(())
    }

    /// Retrieves the identity stored in the session.
    ///
    /// # Returns
    /// - `Ok(Some(Identity))` - Session carries an identity
    /// - `Ok(None)` - No identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session or decode the value
    pub async fn get_identity(&self) -> Result<Option<Identity>, AppError> {
        let identity = self.session.get::<Identity>(SESSION_AUTH_IDENTITY).await?;
        Ok(identity)
    }

    /// Deletes the session from the store, logging the caller out.
    ///
    /// # Returns
    /// - `Ok(())` - Session removed, or there was none
    /// - `Err(AppError::SessionErr(_))` - Failed to delete from the session store
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
