//! Handler functions for the captain API endpoints.
//!
//! Mirrors the rider handlers against `CaptainService` and the
//! `auth_captain` gate variant.

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::api::captains::models::{
    CaptainAuthResponse, LoginCaptainRequest, RegisterCaptainRequest,
};
use crate::api::common::{CLEAR_SESSION_COOKIE, service_error_to_http, session_cookie};
use crate::api::users::handlers::with_set_cookie;
use crate::auth::middleware::{AuthedCaptain, SessionToken};
use crate::database::models::Captain;
use crate::repositories::revoked_token_repository::RevokedTokenRepository;
use crate::services::captain_service::CaptainService;
use crate::utils::jwt::JwtUtils;

/// Handle captain registration.
#[axum::debug_handler]
pub async fn register_captain(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    Json(payload): Json<RegisterCaptainRequest>,
) -> Result<(StatusCode, Json<CaptainAuthResponse>), (StatusCode, Json<Value>)> {
    let service = CaptainService::new(&pool, &jwt);

    match service.register(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle captain login. Sets the session cookie on success.
#[axum::debug_handler]
pub async fn login_captain(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    Json(payload): Json<LoginCaptainRequest>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let service = CaptainService::new(&pool, &jwt);

    match service.login(payload).await {
        Ok(body) => {
            let cookie = session_cookie(&body.token, jwt.expires_in_seconds());
            with_set_cookie(Json(body).into_response(), &cookie)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Return the authenticated captain bound by the auth gate.
#[axum::debug_handler]
pub async fn get_captain_profile(
    Extension(AuthedCaptain(captain)): Extension<AuthedCaptain>,
) -> Json<Captain> {
    Json(captain)
}

/// Handle captain logout: revoke the presented token and clear the cookie.
#[axum::debug_handler]
pub async fn logout_captain(
    Extension(pool): Extension<SqlitePool>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    RevokedTokenRepository::new(&pool)
        .revoke(&token)
        .await
        .map_err(service_error_to_http)?;

    let body = Json(json!({ "message": "Logged out successfully" }));
    with_set_cookie(body.into_response(), CLEAR_SESSION_COOKIE)
}
