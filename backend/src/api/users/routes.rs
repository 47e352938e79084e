//! Defines the HTTP routes for rider registration, authentication, and
//! profile access.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_user_profile, login_user, logout_user, register_user};
use crate::auth::middleware::auth_user;

pub fn users_router() -> Router {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route(
            "/profile",
            get(get_user_profile).layer(middleware::from_fn(auth_user)),
        )
        .route(
            "/logout",
            get(logout_user).layer(middleware::from_fn(auth_user)),
        )
}
