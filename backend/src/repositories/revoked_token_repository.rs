//! Denylist of session tokens invalidated before their natural expiry.
//!
//! Entries live for a fixed retention window matching the token lifetime.
//! Lookups filter expired entries lazily, so correctness does not depend on
//! the periodic sweep.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::database::models::RevokedToken;
use crate::errors::ServiceResult;

/// How long a revocation entry stays effective after insertion.
const RETENTION_SECONDS: i64 = 86_400;

/// Repository for the revoked-token denylist.
pub struct RevokedTokenRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> RevokedTokenRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Marks a token invalid. Revoking an already-revoked token is a no-op,
    /// keeping logout idempotent for the client.
    pub async fn revoke(&self, token: &str) -> ServiceResult<()> {
        sqlx::query("INSERT OR IGNORE INTO revoked_tokens (token, created_at) VALUES (?, ?)")
            .bind(token)
            .bind(Utc::now())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Point lookup. Entries past the retention window are treated as absent
    /// even if the sweep has not removed them yet.
    pub async fn is_revoked(&self, token: &str) -> ServiceResult<bool> {
        let cutoff = Utc::now() - Duration::seconds(RETENTION_SECONDS);
        let entry = sqlx::query_as::<_, RevokedToken>(
            "SELECT token, created_at FROM revoked_tokens WHERE token = ? AND created_at > ?",
        )
        .bind(token)
        .bind(cutoff)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry.is_some())
    }

    /// Drops entries past the retention window. Returns the number of rows
    /// removed.
    pub async fn purge_expired(&self) -> ServiceResult<u64> {
        let cutoff = Utc::now() - Duration::seconds(RETENTION_SECONDS);
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE created_at <= ?")
            .bind(cutoff)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
