//! Database repositories for persistent entities.
//!
//! Each repository owns the SQL for one table. The two principal
//! repositories implement a shared lookup interface so the auth gate can
//! resolve either principal type through the same code path.

use async_trait::async_trait;

use crate::errors::ServiceResult;

pub mod captain_repository;
pub mod revoked_token_repository;
pub mod user_repository;

/// Lookup interface shared by the user and captain credential stores.
///
/// Default read projections blank the stored secret;
/// `find_by_email_with_secret` is the single escape hatch, used by login for
/// password verification. Absence is `None`, never an error.
#[async_trait]
pub trait PrincipalRepository {
    type Record: Send;

    async fn find_by_id(&self, id: &str) -> ServiceResult<Option<Self::Record>>;

    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Self::Record>>;

    async fn find_by_email_with_secret(&self, email: &str) -> ServiceResult<Option<Self::Record>>;

    async fn email_exists(&self, email: &str) -> ServiceResult<bool>;
}
