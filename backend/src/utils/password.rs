//! Password hashing helpers.
//!
//! Hashing and verification are free functions over the stored hash rather
//! than methods on the principal records. Both run on the blocking pool.

use bcrypt::{DEFAULT_COST, hash, verify};
use tokio::task;

use crate::errors::{ServiceError, ServiceResult};

/// Hash a plain-text secret before it is handed to the credential store.
pub async fn hash_password(password: &str) -> ServiceResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|err| ServiceError::internal_error(format!("hashing task failed: {err}")))?
        .map_err(|err| ServiceError::internal_error(format!("password hashing failed: {err}")))
}

/// Compare a plain-text secret against a stored hash.
pub async fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|err| ServiceError::internal_error(format!("verification task failed: {err}")))?
        .map_err(|err| ServiceError::internal_error(format!("password verification failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hashed = hash_password("secret1").await.unwrap();

        assert_ne!(hashed, "secret1");
        assert!(hashed.starts_with("$2"));
        assert!(verify_password("secret1", &hashed).await.unwrap());
        assert!(!verify_password("wrong-pass", &hashed).await.unwrap());
    }
}
