//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. It holds no per-user data; everything a request needs
//! about its caller comes from the request itself.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::middleware::token::TokenDecoder;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// decoder sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for catalog, ownership and profile storage.
    pub db: DatabaseConnection,

    /// Decoder used by the token strategy of identity resolution.
    pub token_decoder: Arc<TokenDecoder>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_decoder` - Bearer token decoder
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, token_decoder: TokenDecoder) -> Self {
        Self {
            db,
            token_decoder: Arc::new(token_decoder),
        }
    }
}
