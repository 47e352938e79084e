//! Handler functions for the rider API endpoints.
//!
//! These functions parse incoming requests, delegate to `UserService`, and
//! translate the outcome into HTTP responses, including the session cookie
//! handling on login and logout.

use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::api::common::{CLEAR_SESSION_COOKIE, service_error_to_http, session_cookie};
use crate::api::users::models::{LoginUserRequest, RegisterUserRequest, UserAuthResponse};
use crate::auth::middleware::{AuthedUser, SessionToken};
use crate::database::models::User;
use crate::errors::ServiceError;
use crate::repositories::revoked_token_repository::RevokedTokenRepository;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;

/// Handle rider registration.
#[axum::debug_handler]
pub async fn register_user(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserAuthResponse>), (StatusCode, Json<Value>)> {
    let service = UserService::new(&pool, &jwt);

    match service.register(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle rider login. Sets the session cookie on success.
#[axum::debug_handler]
pub async fn login_user(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt): Extension<JwtUtils>,
    Json(payload): Json<LoginUserRequest>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let service = UserService::new(&pool, &jwt);

    match service.login(payload).await {
        Ok(body) => {
            let cookie = session_cookie(&body.token, jwt.expires_in_seconds());
            with_set_cookie(Json(body).into_response(), &cookie)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Return the authenticated rider bound by the auth gate.
#[axum::debug_handler]
pub async fn get_user_profile(Extension(AuthedUser(user)): Extension<AuthedUser>) -> Json<User> {
    Json(user)
}

/// Handle rider logout: revoke the presented token and clear the cookie.
#[axum::debug_handler]
pub async fn logout_user(
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

/// Attaches a `Set-Cookie` header to an otherwise finished response.
pub(crate) fn with_set_cookie(
    mut response: Response,
    cookie: &str,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let value = header::HeaderValue::from_str(cookie).map_err(|_| {
        service_error_to_http(ServiceError::internal_error("invalid session cookie value"))
    })?;
    response.headers_mut().insert(header::SET_COOKIE, value);
    Ok(response)
}
