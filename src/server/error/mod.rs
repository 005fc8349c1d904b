//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum serves as the top-level error type that wraps infrastructure errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::config::ConfigError,
        representation::{property_mapping::MappingError, shaping::ShapingError},
    },
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use
/// `#[from]` for automatic conversion; request-level variants carry the
/// message returned to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A shaped field missing from its shape. Field validation was bypassed
    /// upstream, so this is an internal-consistency fault (500), never a
    /// client validation failure.
    #[error(transparent)]
    ShapingErr(#[from] ShapingError),

    /// An order-by key missing from its mapping table after validation.
    /// Internal-consistency fault, same policy as `ShapingErr`.
    #[error(transparent)]
    MappingErr(#[from] MappingError),

    /// JSON serialization error while assembling a response.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

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

    /// Semantically invalid payload (e.g. a book description equal to its
    /// title). Results in 422 Unprocessable Entity.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Request conflicts with existing state. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Request-level variants map to their status code with the message in the
/// body. Everything else is logged with full details and returned as a
/// generic 500 to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
