// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Service-wide error type.
/// Storage failures, rejected identifiers and unknown tenants all end up here
/// and are mapped onto an HTTP response at the handler boundary.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error (storage failures are propagated as-is)
    InternalServerError(String),

    // 400 Bad Request (nil identifiers, inverted windows, bad filters)
    BadRequest(String),

    // 401 Unauthorized
    AuthError(String),

    // 404 Not Found (unknown tenant)
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InternalServerError(msg) => write!(f, "storage error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "invalid request: {}", msg),
            AppError::AuthError(msg) => write!(f, "unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON body with the matching status code.
/// Internal messages are logged, never returned to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
