//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every variant is
//! classified into one `ErrorCode` of the closed taxonomy and rendered through
//! `envelope::error_response`, which owns the status code mapping.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::ErrorCode,
    server::{
        envelope::error_response,
        error::{auth::AuthError, config::ConfigError, validation::ValidationError},
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing identity or missing privilege.
    ///
    /// Results in 401 Unauthorized or 403 Forbidden.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request with per-field details.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with code `DATABASE_ERROR`; the storage
    /// layer's message is passed through to the client.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Listener or socket error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Classifies the error into the closed error-code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::AuthErr(AuthError::Unauthorized) => ErrorCode::Unauthorized,
            Self::AuthErr(AuthError::Forbidden(..)) => ErrorCode::Forbidden,
            Self::ValidationErr(_) => ErrorCode::ValidationError,
            Self::DbErr(_) => ErrorCode::DatabaseError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::ConfigErr(_) | Self::SessionErr(_) | Self::IoErr(_) | Self::InternalError(_) => {
                ErrorCode::InternalError
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::field("body", rejection.body_text()).into()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::field("path", rejection.body_text()).into()
    }
}

/// Converts application errors into HTTP responses.
///
/// Client-facing messages stay generic for everything classified as
/// `INTERNAL_ERROR`; the full error is logged instead. Authorization failures are
/// logged at debug level since they are expected traffic.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("{}", err);
                let message = match err {
                    AuthError::Unauthorized => "Authentication required",
                    AuthError::Forbidden(..) => "You do not have permission to access this resource",
                };
                error_response(code, message.to_string(), None)
            }
            Self::ValidationErr(err) => {
                let message = err.to_string();
                error_response(code, message, Some(err.into_dto()))
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                error_response(code, err.to_string(), None)
            }
            Self::NotFound(msg) => error_response(code, msg, None),
            err => {
                tracing::error!("Internal error: {}", err);
                error_response(code, "Internal server error".to_string(), None)
            }
        }
    }
}
