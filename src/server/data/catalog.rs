//! Catalog repository and query builder.
//!
//! The three catalog tables share the same shape (name, rarity, series, season plus
//! one type-specific column), so a single query builder serves all of them through
//! the `CatalogEntity` trait.

use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::catalog::{
    Boost, CarPart, CatalogFilter, CatalogItem, CatalogKind, Driver,
};

/// Column mapping for a catalog table.
pub trait CatalogEntity: EntityTrait {
    /// Domain model produced for each row.
    type Item: CatalogItem;

    const KIND: CatalogKind;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn rarity_column() -> Self::Column;
    fn series_column() -> Self::Column;
    fn season_column() -> Self::Column;
    fn subtype_column() -> Self::Column;

    fn into_item(model: Self::Model) -> Self::Item;
}

impl CatalogEntity for entity::driver::Entity {
    type Item = Driver;

    const KIND: CatalogKind = CatalogKind::Driver;

    fn id_column() -> Self::Column {
        entity::driver::Column::Id
    }

    fn name_column() -> Self::Column {
        entity::driver::Column::Name
    }

    fn rarity_column() -> Self::Column {
        entity::driver::Column::Rarity
    }

    fn series_column() -> Self::Column {
        entity::driver::Column::Series
    }

    fn season_column() -> Self::Column {
        entity::driver::Column::SeasonId
    }

    fn subtype_column() -> Self::Column {
        entity::driver::Column::MinTier
    }

    fn into_item(model: Self::Model) -> Self::Item {
        Driver::from_entity(model)
    }
}

impl CatalogEntity for entity::car_part::Entity {
    type Item = CarPart;

    const KIND: CatalogKind = CatalogKind::CarPart;

    fn id_column() -> Self::Column {
        entity::car_part::Column::Id
    }

    fn name_column() -> Self::Column {
        entity::car_part::Column::Name
    }

    fn rarity_column() -> Self::Column {
        entity::car_part::Column::Rarity
    }

    fn series_column() -> Self::Column {
        entity::car_part::Column::Series
    }

    fn season_column() -> Self::Column {
        entity::car_part::Column::SeasonId
    }

    fn subtype_column() -> Self::Column {
        entity::car_part::Column::PartType
    }

    fn into_item(model: Self::Model) -> Self::Item {
        CarPart::from_entity(model)
    }
}

impl CatalogEntity for entity::boost::Entity {
    type Item = Boost;

    const KIND: CatalogKind = CatalogKind::Boost;

    fn id_column() -> Self::Column {
        entity::boost::Column::Id
    }

    fn name_column() -> Self::Column {
        entity::boost::Column::Name
    }

    fn rarity_column() -> Self::Column {
        entity::boost::Column::Rarity
    }

    fn series_column() -> Self::Column {
        entity::boost::Column::Series
    }

    fn season_column() -> Self::Column {
        entity::boost::Column::SeasonId
    }

    fn subtype_column() -> Self::Column {
        entity::boost::Column::BoostType
    }

    fn into_item(model: Self::Model) -> Self::Item {
        Boost::from_entity(model)
    }
}

/// Translates a filter into a constrained, ordered select against a catalog table.
///
/// Only constraints present in the filter are applied. Results are ordered by name
/// ascending with ties broken by id. The search term is matched literally as a
/// substring through SQLite's `LIKE`, which folds case for ASCII letters only.
pub fn build_query<E: CatalogEntity>(filter: &CatalogFilter) -> Select<E> {
    let mut query = E::find();

    if let Some(season_id) = filter.season_id {
        query = query.filter(E::season_column().eq(season_id));
    }
    if let Some(rarity) = filter.rarity {
        query = query.filter(E::rarity_column().eq(rarity));
    }
    if let Some(series) = filter.series {
        query = query.filter(E::series_column().eq(series));
    }
    if let Some(subtype) = filter.subtype.clone() {
        query = query.filter(E::subtype_column().eq(subtype));
    }
    if let Some(search) = filter.search.as_deref() {
        let name = Expr::col((E::default(), E::name_column()));
        query = query.filter(sea_orm::sea_query::ExprTrait::like(
            name,
            substring_pattern(search),
        ));
    }

    query
        .order_by_asc(E::name_column())
        .order_by_asc(E::id_column())
}

/// Builds a `%term%` pattern with `\`, `%` and `_` escaped so they match literally.
fn substring_pattern(term: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');

    LikeExpr::new(escaped).escape('\\')
}

/// Repository providing read access to the catalog tables.
pub struct CatalogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogRepository<'a> {
    /// Creates a new CatalogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CatalogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every catalog item matching the filter.
    ///
    /// No limit is pushed into the query; pagination happens after merging so totals
    /// reflect the full filtered catalog.
    ///
    /// # Arguments
    /// - `filter` - Constraints to apply
    ///
    /// # Returns
    /// - `Ok(Vec<E::Item>)` - Matching items ordered by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find<E: CatalogEntity>(&self, filter: &CatalogFilter) -> Result<Vec<E::Item>, DbErr> {
        let models = build_query::<E>(filter).all(self.db).await?;

        Ok(models.into_iter().map(E::into_item).collect())
    }

    /// Finds a single catalog item by id.
    ///
    /// # Returns
    /// - `Ok(Some(E::Item))` - Item exists
    /// - `Ok(None)` - No item with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id<E: CatalogEntity>(&self, id: i32) -> Result<Option<E::Item>, DbErr> {
        let model = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?;

        Ok(model.map(E::into_item))
    }
}
