use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataResponseDto, ErrorDto},
        user::UserDto,
    },
    server::{
        envelope,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            identity::{Credentials, IdentityResolver, MaybeIdentity, TokenStrategy},
            session::AuthSession,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Establish a cookie session from a bearer token.
///
/// Only the bearer token is considered; an existing session does not count. On
/// success the identity is stored in the session and a profile is created for it
/// if none exists.
///
/// # Returns
/// - `200 OK` - The established user
/// - `401 Unauthorized` - Missing, malformed or expired bearer token
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session established", body = DataResponseDto<UserDto>),
        (status = 401, description = "No valid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<DataResponseDto<UserDto>, AppError> {
    let credentials = Credentials {
        bearer: Credentials::bearer_from_headers(&headers),
        session: None,
    };

    let identity = IdentityResolver::new(vec![Box::new(TokenStrategy::new(
        state.token_decoder.clone(),
    ))])
    .resolve(&credentials)
    .await
    .into_identity()
    .ok_or(AuthError::Unauthorized)?;

    let profile = AuthService::new(&state.db)
        .establish_session(&session, &identity)
        .await?;

    Ok(envelope::data(profile.into_dto()))
}

/// Get the current user.
///
/// # Returns
/// - `200 OK` - Resolved identity with its admin flag
/// - `401 Unauthorized` - No identity
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = DataResponseDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    identity: MaybeIdentity,
) -> Result<DataResponseDto<UserDto>, AppError> {
    let identity = identity.into_identity();
    let caller = AuthGuard::new(&state.db, identity.as_ref())
        .require(&[])
        .await?;

    let is_admin = AuthService::new(&state.db).is_admin(caller).await?;

    Ok(envelope::data(caller.clone().into_dto(is_admin)))
}

/// Log out.
///
/// Deletes the cookie session. Bearer tokens are unaffected. Always succeeds; a
/// failure to delete the stored session is logged.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = AuthSession::new(&session).clear().await {
        tracing::warn!("Failed to delete session on logout: {}", e);
    }

    StatusCode::OK
}
