//! Database repository for captain (driver) accounts.
//!
//! Mirrors the user repository with the captain-specific vehicle attributes
//! and availability status. New captains start out inactive.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Captain, CaptainStatus, NewCaptain};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PrincipalRepository;

/// Repository for captain database operations.
pub struct CaptainRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> CaptainRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new captain row and returns it in the default projection.
    ///
    /// The caller supplies the secret already hashed. Required fields must
    /// be non-empty.
    pub async fn create_captain(&self, captain: NewCaptain) -> ServiceResult<Captain> {
        if captain.fullname.firstname.trim().is_empty()
            || captain.email.trim().is_empty()
            || captain.password_hash.is_empty()
        {
            return Err(ServiceError::validation(
                "captain",
                "All fields are required",
            ));
        }

        let now = Utc::now();
        let created = sqlx::query_as::<_, Captain>(
            r#"
            INSERT INTO captains
                (id, firstname, lastname, email, password_hash, color, plate, capacity, vehicle_type, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, firstname, lastname, email, '' AS password_hash,
                      color, plate, capacity, vehicle_type, status, created_at, updated_at
            "#,
        )
        .bind(&captain.id)
        .bind(&captain.fullname.firstname)
        .bind(&captain.fullname.lastname)
        .bind(&captain.email)
        .bind(&captain.password_hash)
        .bind(&captain.vehicle.color)
        .bind(&captain.vehicle.plate)
        .bind(captain.vehicle.capacity)
        .bind(captain.vehicle.vehicle_type)
        .bind(CaptainStatus::Inactive)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return ServiceError::already_exists("Captain", &captain.email);
                }
            }
            ServiceError::from(err)
        })?;

        Ok(created)
    }
}

#[async_trait]
impl<'a> PrincipalRepository for CaptainRepository<'a> {
    type Record = Captain;

    /// Retrieves a captain by id, secret blanked.
    async fn find_by_id(&self, id: &str) -> ServiceResult<Option<Captain>> {
        let captain = sqlx::query_as::<_, Captain>(
            r#"
            SELECT id, firstname, lastname, email, '' AS password_hash,
                   color, plate, capacity, vehicle_type, status, created_at, updated_at
            FROM captains WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(captain)
    }

    /// Retrieves a captain by email, secret blanked.
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Captain>> {
        let captain = sqlx::query_as::<_, Captain>(
            r#"
            SELECT id, firstname, lastname, email, '' AS password_hash,
                   color, plate, capacity, vehicle_type, status, created_at, updated_at
            FROM captains WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(captain)
    }

    /// Retrieves a captain by email including the stored secret, for
    /// password verification only.
    async fn find_by_email_with_secret(&self, email: &str) -> ServiceResult<Option<Captain>> {
        let captain = sqlx::query_as::<_, Captain>(
            r#"
            SELECT id, firstname, lastname, email, password_hash,
                   color, plate, capacity, vehicle_type, status, created_at, updated_at
            FROM captains WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(captain)
    }

    async fn email_exists(&self, email: &str) -> ServiceResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM captains WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
