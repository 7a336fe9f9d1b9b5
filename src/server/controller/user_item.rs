use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Query, State},
    Json,
};

use crate::{
    model::{
        api::{DataResponseDto, ErrorDto, ListResponseDto},
        catalog::{BoostDto, CarPartDto, DriverDto, OwnedItemDto, UpsertOwnershipDto},
    },
    server::{
        data::catalog::CatalogEntity,
        envelope,
        error::AppError,
        middleware::{auth::AuthGuard, identity::MaybeIdentity},
        model::{
            catalog::{Boost, CarPart, CatalogQuery, Driver},
            ownership::UpsertOwnershipParams,
        },
        service::catalog::CatalogService,
        state::AppState,
        util::parse::ParseMode,
    },
};

/// Tag for grouping ownership endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

/// Lists a catalog merged with the caller's ownership.
///
/// Malformed filter values are dropped rather than rejected.
async fn list_owned<E: CatalogEntity, D>(
    state: &AppState,
    identity: MaybeIdentity,
    params: &HashMap<String, String>,
    convert: fn(E::Item) -> D,
) -> Result<ListResponseDto<OwnedItemDto<D>>, AppError> {
    let identity = identity.into_identity();
    let caller = AuthGuard::new(&state.db, identity.as_ref())
        .require(&[])
        .await?;

    let query = CatalogQuery::from_params(E::KIND, params, ParseMode::Lenient)?;

    let page = CatalogService::new(&state.db)
        .list_owned::<E>(&caller.subject, &query)
        .await?;

    Ok(page.into_dto(|view| view.into_dto(convert)))
}

async fn upsert_owned<E: CatalogEntity, D>(
    state: &AppState,
    identity: MaybeIdentity,
    item_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpsertOwnershipDto>, JsonRejection>,
    convert: fn(E::Item) -> D,
) -> Result<DataResponseDto<OwnedItemDto<D>>, AppError> {
    let identity = identity.into_identity();
    let caller = AuthGuard::new(&state.db, identity.as_ref())
        .require(&[])
        .await?;

    let Path(item_id) = item_id?;
    let Json(payload) = payload?;

    let view = CatalogService::new(&state.db)
        .upsert_ownership::<E>(UpsertOwnershipParams {
            user_id: caller.subject.clone(),
            item_id,
            level: payload.level,
            card_count: payload.card_count,
        })
        .await?;

    Ok(envelope::data(view.into_dto(convert)))
}

/// List the caller's boost collection.
///
/// Every boost matching the filters is returned, with `level`, `card_count` and
/// `is_owned` taken from the caller's ownership records. Boosts without a record
/// report zeros. Pagination totals count the whole filtered catalog.
///
/// # Access Control
/// - Requires a resolved identity (bearer token or session)
///
/// # Returns
/// - `200 OK` - Page of merged items
/// - `401 Unauthorized` - No identity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user-boosts",
    tag = COLLECTION_TAG,
    params(
        ("season_id" = Option<i32>, Query, description = "Season id"),
        ("rarity" = Option<i32>, Query, description = "Exact rarity"),
        ("series" = Option<i32>, Query, description = "Exact series"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved boost collection", body = ListResponseDto<OwnedItemDto<BoostDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_boosts(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<OwnedItemDto<BoostDto>>, AppError> {
    list_owned::<entity::boost::Entity, _>(&state, identity, &params, Boost::into_dto).await
}

/// List the caller's driver collection.
#[utoipa::path(
    get,
    path = "/api/user-drivers",
    tag = COLLECTION_TAG,
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
        (status = 200, description = "Successfully retrieved driver collection", body = ListResponseDto<OwnedItemDto<DriverDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_drivers(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<OwnedItemDto<DriverDto>>, AppError> {
    list_owned::<entity::driver::Entity, _>(&state, identity, &params, Driver::into_dto).await
}

/// List the caller's car part collection.
#[utoipa::path(
    get,
    path = "/api/user-car-parts",
    tag = COLLECTION_TAG,
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
        (status = 200, description = "Successfully retrieved car part collection", body = ListResponseDto<OwnedItemDto<CarPartDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_car_parts(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ListResponseDto<OwnedItemDto<CarPartDto>>, AppError> {
    list_owned::<entity::car_part::Entity, _>(&state, identity, &params, CarPart::into_dto).await
}

/// Record progression on a boost.
///
/// Stores the caller's level and card count for one boost. Repeated writes replace
/// the previous values.
///
/// # Access Control
/// - Requires a resolved identity (bearer token or session)
///
/// # Returns
/// - `200 OK` - The merged view after the write
/// - `400 Bad Request` - Negative level or card count, or malformed body
/// - `401 Unauthorized` - No identity
/// - `404 Not Found` - Boost does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/user-boosts/{item_id}",
    tag = COLLECTION_TAG,
    params(("item_id" = i32, Path, description = "Boost id")),
    request_body = UpsertOwnershipDto,
    responses(
        (status = 200, description = "Successfully stored progression", body = DataResponseDto<OwnedItemDto<BoostDto>>),
        (status = 400, description = "Invalid progression values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Boost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user_boost(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    item_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpsertOwnershipDto>, JsonRejection>,
) -> Result<DataResponseDto<OwnedItemDto<BoostDto>>, AppError> {
    upsert_owned::<entity::boost::Entity, _>(&state, identity, item_id, payload, Boost::into_dto)
        .await
}

#[utoipa::path(
    put,
    path = "/api/user-drivers/{item_id}",
    tag = COLLECTION_TAG,
    params(("item_id" = i32, Path, description = "Driver id")),
    request_body = UpsertOwnershipDto,
    responses(
        (status = 200, description = "Successfully stored progression", body = DataResponseDto<OwnedItemDto<DriverDto>>),
        (status = 400, description = "Invalid progression values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user_driver(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    item_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpsertOwnershipDto>, JsonRejection>,
) -> Result<DataResponseDto<OwnedItemDto<DriverDto>>, AppError> {
    upsert_owned::<entity::driver::Entity, _>(&state, identity, item_id, payload, Driver::into_dto)
        .await
}

#[utoipa::path(
    put,
    path = "/api/user-car-parts/{item_id}",
    tag = COLLECTION_TAG,
    params(("item_id" = i32, Path, description = "Car part id")),
    request_body = UpsertOwnershipDto,
    responses(
        (status = 200, description = "Successfully stored progression", body = DataResponseDto<OwnedItemDto<CarPartDto>>),
        (status = 400, description = "Invalid progression values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Car part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user_car_part(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    item_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpsertOwnershipDto>, JsonRejection>,
) -> Result<DataResponseDto<OwnedItemDto<CarPartDto>>, AppError> {
    upsert_owned::<entity::car_part::Entity, _>(
        &state,
        identity,
        item_id,
        payload,
        CarPart::into_dto,
    )
    .await
}
