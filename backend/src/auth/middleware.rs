//! Middleware for protecting authenticated routes.
//!
//! Thin per-route wrappers around the auth gate. On success the resolved
//! principal and the presented token are inserted into the request
//! extensions for the downstream handler; on failure the request
//! short-circuits with the mapped error response.

use axum::{
    Json,
    extract::{Extension, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::api::common::service_error_to_http;
use crate::auth::gate::{AuthGate, extract_token};
use crate::database::models::{Captain, User};
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;

/// Rider principal bound by `auth_user`.
#[derive(Debug, Clone)]
pub struct AuthedUser(pub User);

/// Captain principal bound by `auth_captain`.
#[derive(Debug, Clone)]
pub struct AuthedCaptain(pub Captain);

/// The token the request was authorized with, kept around so logout can
/// revoke exactly what was presented.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Rider authentication middleware.
pub async fn auth_user(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let token = extract_token(request.headers())
        .ok_or_else(|| service_error_to_http(ServiceError::Unauthorized))?;

    let user = AuthGate::new(&pool, &jwt)
        .authorize_user(&token)
        .await
        .map_err(service_error_to_http)?;

    request.extensions_mut().insert(AuthedUser(user));
    request.extensions_mut().insert(SessionToken(token));
    Ok(next.run(request).await)
}

/// Captain authentication middleware.
pub async fn auth_captain(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let token = extract_token(request.headers())
        .ok_or_else(|| service_error_to_http(ServiceError::Unauthorized))?;

    let captain = AuthGate::new(&pool, &jwt)
        .authorize_captain(&token)
        .await
        .map_err(service_error_to_http)?;

    request.extensions_mut().insert(AuthedCaptain(captain));
    request.extensions_mut().insert(SessionToken(token));
    Ok(next.run(request).await)
}
