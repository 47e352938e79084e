//! Captain-facing API surface: registration, login, profile, logout.

pub mod handlers;
pub mod models;
pub mod routes;
