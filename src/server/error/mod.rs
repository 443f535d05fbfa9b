//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type and implements `IntoResponse` so handlers can return
//! it directly. Every error body uses the `{"status": "error", "message": ...}` envelope.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, kind::UnknownKindError},
    server::{error::config::ConfigError, model::overrider::FieldValueError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Socket bind or serve failure at startup.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Database operation error from SeaORM without an operation message.
    ///
    /// Results in 422 Unprocessable Entity with a generic message. `RecordNotFound`
    /// never lands here, it converts to `NotFound`.
    #[error(transparent)]
    DbErr(DbErr),

    /// Database error tagged with the message of the failing operation.
    ///
    /// Results in 422 Unprocessable Entity with `message` as the body. The source
    /// and the request arguments in `args` are only logged.
    #[error("{message}: {source}")]
    Unprocessable {
        message: &'static str,
        args: Vec<(&'static str, String)>,
        #[source]
        source: DbErr,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message. Covers malformed
    /// ids, unknown entity or place kinds, and malformed JSON bodies.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Attaches a fixed operation message to a storage failure.
    ///
    /// Not-found and bad-request errors pass through unchanged so their status
    /// codes survive.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            AppError::DbErr(source) => AppError::Unprocessable {
                message,
                args: Vec::new(),
                source,
            },
            other => other,
        }
    }

    /// Records a request argument on a tagged storage failure.
    ///
    /// Arguments are logged next to the operation message when the error becomes a
    /// response. Other variants are returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// service
    ///     .get(id)
    ///     .await
    ///     .map_err(|e| e.context("Could not get menu").arg("id", id))?;
    /// ```
    pub fn arg(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        if let AppError::Unprocessable { args, .. } = &mut self {
            args.push((name, value.to_string()));
        }
        self
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            other => AppError::DbErr(other),
        }
    }
}

impl From<UnknownKindError> for AppError {
    fn from(err: UnknownKindError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<FieldValueError> for AppError {
    fn from(err: FieldValueError) -> Self {
        AppError::BadRequest(err.to_string())
    }
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

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For `Unprocessable` and `DbErr`
/// - 500 Internal Server Error - For `ConfigErr` and `IoErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Unprocessable {
                message,
                args,
                source,
            } => {
                tracing::error!(
                    operation = message,
                    args = %render_args(&args),
                    error = %source,
                    "{}",
                    message
                );
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto::new(message))).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!(error = %err, "Unhandled database error");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto::new("Unprocessable entity")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders request arguments as space-separated `name=value` pairs.
fn render_args(args: &[(&'static str, String)]) -> String {
    args.iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
