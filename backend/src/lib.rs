//! Swiftcab backend: registration, authentication, and profile retrieval
//! for riders and captains.
//!
//! The crate is organized the way the requests flow: `api` holds the HTTP
//! surface, `services` the orchestration, `repositories` the SQL, `auth`
//! the gate protecting private routes, and `utils` the token and password
//! primitives underneath it all.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::{Extension, Router, response::Json, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::utils::jwt::JwtUtils;

/// Builds the application router with every API route and shared state.
pub fn app(pool: SqlitePool, jwt: JwtUtils) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/users", api::users::routes::users_router())
        .nest("/api/captains", api::captains::routes::captains_router())
        .layer(Extension(pool))
        .layer(Extension(jwt))
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Swiftcab Backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
