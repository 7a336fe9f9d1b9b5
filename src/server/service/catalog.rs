use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        catalog::{CatalogEntity, CatalogRepository},
        ownership::OwnershipRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        catalog::CatalogQuery,
        ownership::{MergedView, Ownership, UpsertOwnershipParams},
        page::Page,
    },
    service::{merge::merge, pagination::paginate},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a filtered catalog
    pub async fn list<E: CatalogEntity>(
        &self,
        query: &CatalogQuery,
    ) -> Result<Page<E::Item>, AppError> {
        let items = CatalogRepository::new(self.db)
            .find::<E>(&query.filter)
            .await?;

        Ok(paginate(items, query.page))
    }

    /// Gets one page of a filtered catalog merged with the user's ownership records.
    ///
    /// Pagination is applied after merging so `total` counts every catalog item that
    /// matches the filter, owned or not.
    pub async fn list_owned<E: CatalogEntity>(
        &self,
        user_id: &str,
        query: &CatalogQuery,
    ) -> Result<Page<MergedView<E::Item>>, AppError> {
        let items = CatalogRepository::new(self.db)
            .find::<E>(&query.filter)
            .await?;
        let records = OwnershipRepository::new(self.db)
            .find_by_user(E::KIND, user_id)
            .await?;

        Ok(paginate(merge(items, &records), query.page))
    }

    /// Records a user's level and card count for one catalog item
    pub async fn upsert_ownership<E: CatalogEntity>(
        &self,
        params: UpsertOwnershipParams,
    ) -> Result<MergedView<E::Item>, AppError> {
        let mut errors = ValidationError::new();
        if params.level < 0 {
            errors.push("level", "must be greater than or equal to 0".to_string());
        }
        if params.card_count < 0 {
            errors.push("card_count", "must be greater than or equal to 0".to_string());
        }
        errors.into_result()?;

        let item = CatalogRepository::new(self.db)
            .find_by_id::<E>(params.item_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} {} not found", E::KIND.label(), params.item_id))
            })?;

        let record = OwnershipRepository::new(self.db)
            .upsert(E::KIND, params)
            .await?;

        Ok(MergedView {
            item,
            ownership: Ownership::from(&record),
        })
    }
}
