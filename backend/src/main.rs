//! Main entry point for the Swiftcab backend.
//!
//! Initializes logging, loads configuration (failing fast on missing
//! required settings), connects the database, starts the revoked-token
//! sweeper, and serves the API.

use std::time::Duration;

use backend::app;
use backend::config::Config;
use backend::database::Database;
use backend::repositories::revoked_token_repository::RevokedTokenRepository;
use backend::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use tracing::{info, warn};
use tracing_subscriber::fmt::init;

const SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();
    let jwt = JwtUtils::new(&config);

    tokio::spawn(sweep_revoked_tokens(pool.clone()));

    let app = app(pool, jwt);
    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Swiftcab server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

/// Hourly cleanup of revocation entries past their retention window.
/// Lookups filter expired entries themselves.
async fn sweep_revoked_tokens(pool: SqlitePool) {
    let mut interval = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        match RevokedTokenRepository::new(&pool).purge_expired().await {
            Ok(purged) if purged > 0 => info!("purged {purged} expired revoked tokens"),
            Ok(_) => {}
            Err(err) => warn!("revoked token sweep failed: {err}"),
        }
    }
}
