//! Database repository for rider accounts.
//!
//! Handles all persistence operations for the User entity. The unique email
//! constraint is the arbiter under concurrent registration; a constraint
//! violation surfaces as `AlreadyExists`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{NewUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PrincipalRepository;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user row and returns it in the default projection.
    ///
    /// The caller supplies the secret already hashed. Required fields must
    /// be non-empty.
    pub async fn create_user(&self, user: NewUser) -> ServiceResult<User> {
        if user.fullname.firstname.trim().is_empty()
            || user.email.trim().is_empty()
            || user.password_hash.is_empty()
        {
            return Err(ServiceError::validation("user", "All fields are required"));
        }

        let now = Utc::now();
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, firstname, lastname, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, firstname, lastname, email, '' AS password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.fullname.firstname)
        .bind(&user.fullname.lastname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return ServiceError::already_exists("User", &user.email);
                }
            }
            ServiceError::from(err)
        })?;

        Ok(created)
    }
}

#[async_trait]
impl<'a> PrincipalRepository for UserRepository<'a> {
    type Record = User;

    /// Retrieves a user by id, secret blanked.
    async fn find_by_id(&self, id: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, '' AS password_hash, created_at, updated_at
            FROM users WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by email, secret blanked.
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, '' AS password_hash, created_at, updated_at
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by email including the stored secret, for password
    /// verification only.
    async fn find_by_email_with_secret(&self, email: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_hash, created_at, updated_at
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> ServiceResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
