//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every endpoint answers failures with the same `ErrorDto` body.

pub mod config;
pub mod import;

use std::collections::BTreeMap;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, import::ImportError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion, while the message variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Uploaded CSV content could not be turned into bills.
    ///
    /// Results in 400 Bad Request with the import error as message.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Request body failed validation.
    ///
    /// Results in 400 Bad Request with an `errors` map of wire field name to message.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Import(ImportError::Upload(err.body_text()))
    }
}

/// Builds the JSON error body with the current timestamp.
fn error_body(status: StatusCode, message: String) -> ErrorDto {
    ErrorDto {
        status: status.as_u16(),
        message,
        timestamp: chrono::Utc::now().timestamp_millis(),
        errors: None,
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an HTTP status code and an `ErrorDto` body. Internal
/// errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `Validation` and `Import` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                let status = StatusCode::NOT_FOUND;
                (status, Json(error_body(status, msg))).into_response()
            }
            Self::BadRequest(msg) => {
                let status = StatusCode::BAD_REQUEST;
                (status, Json(error_body(status, msg))).into_response()
            }
            Self::Import(err) => {
                tracing::debug!("Rejected CSV import: {}", err);
                let status = StatusCode::BAD_REQUEST;
                (status, Json(error_body(status, err.to_string()))).into_response()
            }
            Self::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ErrorDto {
                    errors: Some(errors),
                    ..error_body(status, "Validation failed".to_string())
                };
                (status, Json(body)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (
            status,
            Json(error_body(status, "Internal server error".to_string())),
        )
            .into_response()
    }
}
