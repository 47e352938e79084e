//! Shared helpers for in-crate tests.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::database::MIGRATOR;
use crate::utils::jwt::JwtUtils;

/// Fresh in-memory database with migrations applied. A single connection
/// keeps every query on the same in-memory instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    MIGRATOR.run(&pool).await.expect("failed to run migrations");
    pool
}

pub fn test_jwt() -> JwtUtils {
    JwtUtils::with_secret("test-secret", 3600)
}
