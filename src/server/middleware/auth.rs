use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    model::identity::Identity,
};

pub enum Permission {
    Admin,
}

/// Gate for endpoints that need an identity, optionally with privileges.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: Option<&'a Identity>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: Option<&'a Identity>) -> Self {
        Self { db, identity }
    }

    /// Requires a resolved identity holding every listed permission.
    ///
    /// Admin status is read from the caller's profile. A missing profile or a failed
    /// lookup denies the request.
    ///
    /// # Returns
    /// - `Ok(&Identity)` - Caller is authenticated and authorized
    /// - `Err(AuthError::Unauthorized)` - No identity was resolved
    /// - `Err(AuthError::Forbidden)` - Identity lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<&'a Identity, AppError> {
        let Some(identity) = self.identity else {
            return Err(AuthError::Unauthorized.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let is_admin = match ProfileRepository::new(self.db)
                        .find_by_id(&identity.subject)
                        .await
                    {
                        Ok(profile) => profile.is_some_and(|p| p.is_admin),
                        Err(e) => {
                            tracing::warn!(
                                "Admin lookup failed for {}: {}",
                                identity.subject,
                                e
                            );
                            false
                        }
                    };

                    if !is_admin {
                        return Err(AuthError::Forbidden(
                            identity.subject.clone(),
                            "admin privileges required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(identity)
    }
}
