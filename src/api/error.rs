//! Mapping of application errors onto HTTP responses.
//!
//! The status depends on the operation as well as on the error kind: any
//! failure while creating an entry is the client's 400, while a storage
//! failure on a read path is a 500.

use crate::errors::{AppError, ErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// 400 with `{"detail": ...}`.
    BadRequest(String),
    /// 500 with a plain-text body; the detail is only logged.
    Internal(String),
}

impl ApiError {
    /// Failure while creating an entry (validation or insert-and-read-back).
    pub fn write(err: AppError) -> Self {
        ApiError::BadRequest(err.to_string())
    }

    /// Failure while listing or aggregating.
    pub fn read(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::ValidationFailure => ApiError::BadRequest(err.to_string()),
            ErrorKind::StorageFailure => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "Request rejected");
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
