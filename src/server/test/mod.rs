//! End-to-end tests through the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    middleware::token::{encode_token, TokenDecoder},
    router::router,
    state::AppState,
};


struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

/// Builds the application over an in-memory database with every table created.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    let app = router()
        .with_state(AppState::new(db, TokenDecoder::unverified()))
        .layer(SessionManagerLayer::new(store).with_secure(false));

    (test, app)
}

/// Bearer header value for a token that expires in an hour.
fn bearer(subject: &str) -> String {
    let token = encode_token(
        &json!({
            "sub": subject,
            "email": format!("{}@example.com", subject),
            "exp": Utc::now().timestamp() + 3600
        }),
        b"unused",
    );
    format!("Bearer {}", token)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_as(uri: &str, subject: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(subject))
        .body(Body::empty())
        .unwrap()
}

fn put_json_as(uri: &str, subject: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(subject))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
