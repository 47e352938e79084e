//! Defines the HTTP routes for captain registration, authentication, and
//! profile access.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_captain_profile, login_captain, logout_captain, register_captain};
use crate::auth::middleware::auth_captain;

pub fn captains_router() -> Router {
    Router::new()
        .route("/register", post(register_captain))
        .route("/login", post(login_captain))
        .route(
            "/profile",
            get(get_captain_profile).layer(middleware::from_fn(auth_captain)),
        )
        .route(
            "/logout",
            get(logout_captain).layer(middleware::from_fn(auth_captain)),
        )
}
