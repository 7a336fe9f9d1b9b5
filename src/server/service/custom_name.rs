use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{catalog::CatalogRepository, custom_name::BoostCustomNameRepository},
    error::AppError,
    model::custom_name::BoostCustomName,
};

pub struct CustomNameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomNameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's custom boost names keyed by boost id.
    ///
    /// Custom names are cosmetic, so a missing user or a failed lookup yields an empty
    /// map instead of an error.
    pub async fn get_for_user(&self, user_id: Option<&str>) -> BTreeMap<i32, String> {
        let Some(user_id) = user_id else {
            return BTreeMap::new();
        };

        match BoostCustomNameRepository::new(self.db)
            .get_by_user(user_id)
            .await
        {
            Ok(names) => names
                .into_iter()
                .map(|name| (name.boost_id, name.custom_name))
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to load custom names for {}: {}", user_id, e);
                BTreeMap::new()
            }
        }
    }

    /// Sets or clears a user's custom name for a boost.
    ///
    /// The name is trimmed; a blank name removes the stored one.
    ///
    /// # Returns
    /// - `Ok(Some(BoostCustomName))` - Name stored
    /// - `Ok(None)` - Name cleared
    /// - `Err(AppError::NotFound)` - Boost does not exist
    pub async fn set(
        &self,
        user_id: &str,
        boost_id: i32,
        custom_name: &str,
    ) -> Result<Option<BoostCustomName>, AppError> {
        CatalogRepository::new(self.db)
            .find_by_id::<entity::boost::Entity>(boost_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Boost {} not found", boost_id)))?;

        let repo = BoostCustomNameRepository::new(self.db);
        let custom_name = custom_name.trim();

        if custom_name.is_empty() {
            repo.delete(user_id, boost_id).await?;
            return Ok(None);
        }

        let stored = repo
            .upsert(user_id, boost_id, custom_name.to_string())
            .await?;

        Ok(Some(stored))
    }

    /// Gets every stored custom name for the administrative export
    pub async fn export(&self) -> Result<(DateTime<Utc>, Vec<BoostCustomName>), AppError> {
        let names = BoostCustomNameRepository::new(self.db).get_all().await?;

        Ok((Utc::now(), names))
    }
}
