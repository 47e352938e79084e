//! Central module for application-wide configuration settings.
//!
//! Configuration comes from the environment (with `.env` support via
//! dotenvy). The database connection string and the token signing secret are
//! required; the process refuses to start without them.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL not set")?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout_seconds: parse_or("DB_ACQUIRE_TIMEOUT_SECONDS", 3)?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET not set")?,
            jwt_expires_in_seconds: parse_or("JWT_EXPIRES_IN_SECONDS", 86_400)?,
            server_port: parse_or("SERVER_PORT", 3000)?,
        })
    }
}

fn parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("{name} must be a valid number")),
        Err(_) => Ok(default),
    }
}
