use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    response::Response,
    Json,
};

use crate::{
    model::{
        api::{DataResponseDto, ErrorDto},
        user::{BoostCustomNameDto, CustomNameExportDto, CustomNamesDto, SetCustomNameDto},
    },
    server::{
        envelope,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            identity::MaybeIdentity,
        },
        model::custom_name::BoostCustomName,
        service::custom_name::CustomNameService,
        state::AppState,
    },
};

/// Tag for grouping custom name endpoints in OpenAPI documentation
pub static CUSTOM_NAME_TAG: &str = "custom-name";

const EXPORT_FILENAME: &str = "boost-custom-names.json";

/// Get the caller's custom boost names.
///
/// Returns a map of boost id to custom name. Anonymous callers and failed lookups
/// get an empty map, never an error.
#[utoipa::path(
    get,
    path = "/api/boosts/custom-names",
    tag = CUSTOM_NAME_TAG,
    responses(
        (status = 200, description = "Custom names keyed by boost id", body = DataResponseDto<CustomNamesDto>)
    ),
)]
pub async fn get_custom_names(
    State(state): State<AppState>,
    identity: MaybeIdentity,
) -> DataResponseDto<CustomNamesDto> {
    let identity = identity.into_identity();

    let names = CustomNameService::new(&state.db)
        .get_for_user(identity.as_ref().map(|i| i.subject.as_str()))
        .await;

    envelope::data(CustomNamesDto(names))
}

/// Set or clear the caller's custom name for a boost.
///
/// A blank `custom_name` removes the stored name.
///
/// # Access Control
/// - Requires a resolved identity (bearer token or session)
///
/// # Returns
/// - `200 OK` - Stored name, or `null` once cleared
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - No identity
/// - `404 Not Found` - Boost does not exist
#[utoipa::path(
    put,
    path = "/api/boosts/custom-names/{boost_id}",
    tag = CUSTOM_NAME_TAG,
    params(("boost_id" = i32, Path, description = "Boost id")),
    request_body = SetCustomNameDto,
    responses(
        (status = 200, description = "Successfully stored custom name", body = DataResponseDto<BoostCustomNameDto>),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Boost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_custom_name(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    boost_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SetCustomNameDto>, JsonRejection>,
) -> Result<DataResponseDto<BoostCustomNameDto>, AppError> {
    let identity = identity.into_identity();
    let caller = AuthGuard::new(&state.db, identity.as_ref())
        .require(&[])
        .await?;

    let Path(boost_id) = boost_id?;
    let Json(payload) = payload?;

    let stored = CustomNameService::new(&state.db)
        .set(&caller.subject, boost_id, &payload.custom_name)
        .await?;

    Ok(envelope::data(BoostCustomNameDto {
        boost_id,
        custom_name: stored.map(|name| name.custom_name),
    }))
}

/// Export every user's custom boost names.
///
/// Served as a JSON file download.
///
/// # Access Control
/// - `Admin` - Caller's profile must carry the admin flag
///
/// # Returns
/// - `200 OK` - Export document as an attachment
/// - `401 Unauthorized` - No identity
/// - `403 Forbidden` - Identity is not an admin, or admin status could not be determined
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/export-custom-names",
    tag = CUSTOM_NAME_TAG,
    responses(
        (status = 200, description = "Export document", body = CustomNameExportDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_custom_names(
    State(state): State<AppState>,
    identity: MaybeIdentity,
) -> Result<Response, AppError> {
    let identity = identity.into_identity();
    AuthGuard::new(&state.db, identity.as_ref())
        .require(&[Permission::Admin])
        .await?;

    let (exported_at, names) = CustomNameService::new(&state.db).export().await?;

    let document = CustomNameExportDto {
        exported_at,
        boost_custom_names: names.into_iter().map(BoostCustomName::into_dto).collect(),
    };

    Ok(envelope::attachment(EXPORT_FILENAME, document))
}
