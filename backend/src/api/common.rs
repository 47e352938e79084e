//! Shared helpers for API responses.
//!
//! Maps `ServiceError` to HTTP status codes and the response bodies clients
//! expect: validation failures as an itemized `errors` array, everything
//! else as a `message`. Infra errors are logged here and returned as generic
//! bodies. Also holds the session-cookie helpers shared by the user and
//! captain surfaces.

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::auth::gate::TOKEN_COOKIE;
use crate::errors::ServiceError;

/// Builds the `Set-Cookie` value attached by login.
pub fn session_cookie(token: &str, max_age_seconds: u64) -> String {
    format!("{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}")
}

/// `Set-Cookie` value that clears the session cookie at logout.
pub const CLEAR_SESSION_COOKIE: &str = "token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// Converts a ServiceError to an HTTP response in the standard body shape.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<Value>) {
    match error {
        ServiceError::Validation { violations } => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errors": violations })),
        ),
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        ),
        ServiceError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        ),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("{entity} '{identifier}' not found") })),
        ),
        ServiceError::AlreadyExists { entity, .. } => (
            StatusCode::CONFLICT,
            Json(json!({ "message": format!("{entity} with this email already exists") })),
        ),
        ServiceError::StoreUnavailable { source } => {
            tracing::error!("store unavailable: {source}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "message": "Service temporarily unavailable" })),
            )
        }
        ServiceError::Database { source } => {
            tracing::error!("database error: {source}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("internal error: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        }
    }
}
