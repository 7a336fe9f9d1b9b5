use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        catalog::{self, CATALOG_TAG},
        custom_name::{self, CUSTOM_NAME_TAG},
        user_item::{self, COLLECTION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pitwall API", description = "Racing game catalog and collection tracker"),
    tags(
        (name = CATALOG_TAG, description = "Driver, car part and boost catalogs"),
        (name = COLLECTION_TAG, description = "Per-user ownership of catalog items"),
        (name = CUSTOM_NAME_TAG, description = "Per-user boost labels"),
        (name = AUTH_TAG, description = "Cookie sessions and the current user")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(catalog::get_drivers))
        .routes(routes!(catalog::get_car_parts))
        .routes(routes!(catalog::get_boosts))
        .routes(routes!(user_item::get_user_drivers))
        .routes(routes!(user_item::get_user_car_parts))
        .routes(routes!(user_item::get_user_boosts))
        .routes(routes!(user_item::put_user_driver))
        .routes(routes!(user_item::put_user_car_part))
        .routes(routes!(user_item::put_user_boost))
        .routes(routes!(custom_name::get_custom_names))
        .routes(routes!(custom_name::put_custom_name))
        .routes(routes!(custom_name::export_custom_names))
        .routes(routes!(auth::create_session))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
