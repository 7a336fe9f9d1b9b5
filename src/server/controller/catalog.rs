use std::collections::HashMap;

use axum::extract::{Query, State};

use crate::{
    model::{
        api::{ErrorDto, ListResponseDto},
        catalog::{BoostDto, CarPartDto, DriverDto},
    },
    server::{
        data::catalog::CatalogEntity,
        error::AppError,
        model::catalog::{Boost, CarPart, CatalogQuery, Driver},
        service::catalog::CatalogService,
        state::AppState,
        util::parse::ParseMode,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Lists one catalog with strict filter validation.
async fn list<E: CatalogEntity, D>(
    state: &AppState,
    params: &HashMap<String, String>,
    convert: fn(E::Item) -> D,
) -> Result<ListResponseDto<D>, AppError> {
    let query = CatalogQuery::from_params(E::KIND, params, ParseMode::Strict)?;

    let page = CatalogService::new(&state.db).list::<E>(&query).await?;

    Ok(page.into_dto(convert))
}

/// List drivers.
///
/// Returns a filtered, name-ordered page of the driver catalog. No identity is
/// required.
///
/// # Returns
/// - `200 OK` - Page of drivers with pagination metadata
/// - `400 Bad Request` - A recognized filter has a malformed value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = CATALOG_TAG,
    params(
        ("season_id" = Option<i32>, Query, description = "Season id"),
        ("rarity" = Option<i32>, Query, description = "Exact rarity"),
        ("series" = Option<i32>, Query, description = "Exact series"),
        ("min_tier" = Option<i32>, Query, description = "Exact minimum tier"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drivers", body = ListResponseDto<DriverDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drivers(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<DriverDto>, AppError> {
    list::<entity::driver::Entity, _>(&state, &params, Driver::into_dto).await
}

/// List car parts.
///
/// Same contract as the driver listing, with `part_type` as the catalog-specific
/// filter.
#[utoipa::path(
    get,
    path = "/api/car-parts",
    tag = CATALOG_TAG,
    params(
        ("season_id" = Option<i32>, Query, description = "Season id"),
        ("rarity" = Option<i32>, Query, description = "Exact rarity"),
        ("series" = Option<i32>, Query, description = "Exact series"),
        ("part_type" = Option<String>, Query, description = "Exact part type"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved car parts", body = ListResponseDto<CarPartDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_parts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<CarPartDto>, AppError> {
    list::<entity::car_part::Entity, _>(&state, &params, CarPart::into_dto).await
}

#[utoipa::path(
    get,
    path = "/api/boosts",
    tag = CATALOG_TAG,
    params(
        ("season_id" = Option<i32>, Query, description = "Season id"),
        ("rarity" = Option<i32>, Query, description = "Exact rarity"),
        ("series" = Option<i32>, Query, description = "Exact series"),
        ("boost_type" = Option<String>, Query, description = "Exact boost type"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved boosts", body = ListResponseDto<BoostDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boosts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<BoostDto>, AppError> {
    list::<entity::boost::Entity, _>(&state, &params, Boost::into_dto).await
}
