//! Response envelope shaping.
//!
//! Every response body leaves the server in one of two shapes: success
//! (`{ data, pagination? }`) or failure (`{ error: { code, message, details? } }`).
//! This module is the only place HTTP status codes are chosen.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    model::api::{
        DataResponseDto, ErrorBodyDto, ErrorCode, ErrorDto, FieldErrorDto, ListResponseDto,
        PaginationDto,
    },
    server::model::page::Page,
};

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Builds the failure envelope for an error code.
pub fn error_response(
    code: ErrorCode,
    message: String,
    details: Option<Vec<FieldErrorDto>>,
) -> Response {
    (
        code.status(),
        Json(ErrorDto {
            error: ErrorBodyDto {
                code,
                message,
                details,
            },
        }),
    )
        .into_response()
}

impl<T: Serialize> IntoResponse for ListResponseDto<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for DataResponseDto<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl<T> Page<T> {
    /// Wraps a page into the list envelope, converting each item into its DTO.
    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> ListResponseDto<D> {
        ListResponseDto {
            data: self.items.into_iter().map(convert).collect(),
            pagination: PaginationDto {
                page: self.page,
                limit: self.limit,
                total: self.total,
                total_pages: self.total_pages,
            },
        }
    }
}

/// Wraps a single resource into the data envelope.
pub fn data<T>(data: T) -> DataResponseDto<T> {
    DataResponseDto { data }
}

/// Serves a JSON document as a file download.
pub fn attachment<T: Serialize>(filename: &str, body: T) -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )],
        Json(body),
    )
        .into_response()
}
