//! The request-authorization decision point.
//!
//! Composes the revocation list, token verification, and principal
//! resolution into a single short-circuiting check with two terminal
//! outcomes: a resolved principal, or `ServiceError::Unauthorized`. Which
//! auth check failed is not observable in the result; store failures keep
//! their own error and surface as 5xx, not 401.

use axum::http::{HeaderMap, header};
use sqlx::SqlitePool;

use crate::database::models::{Captain, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PrincipalRepository;
use crate::repositories::captain_repository::CaptainRepository;
use crate::repositories::revoked_token_repository::RevokedTokenRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::{Claims, JwtUtils};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Extracts the session token from the request: the `token` cookie is
/// consulted first, then the `Authorization: Bearer` header.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for cookie in cookies.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == TOKEN_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Authorization gate shared by the user and captain route guards.
pub struct AuthGate<'a> {
    pool: &'a SqlitePool,
    jwt: &'a JwtUtils,
}

impl<'a> AuthGate<'a> {
    pub fn new(pool: &'a SqlitePool, jwt: &'a JwtUtils) -> Self {
        Self { pool, jwt }
    }

    /// Steps shared by both variants: revocation check, then signature and
    /// expiry verification.
    async fn check_token(&self, token: &str) -> ServiceResult<Claims> {
        if RevokedTokenRepository::new(self.pool)
            .is_revoked(token)
            .await?
        {
            return Err(ServiceError::Unauthorized);
        }

        self.jwt.verify(token).map_err(|_| ServiceError::Unauthorized)
    }

    async fn resolve<R>(&self, repo: R, claims: &Claims) -> ServiceResult<R::Record>
    where
        R: PrincipalRepository + Send + Sync,
    {
        repo.find_by_id(&claims.sub)
            .await?
            .ok_or(ServiceError::Unauthorized)
    }

    /// Authorizes a rider request, yielding the bound principal.
    pub async fn authorize_user(&self, token: &str) -> ServiceResult<User> {
        let claims = self.check_token(token).await?;
        self.resolve(UserRepository::new(self.pool), &claims).await
    }

    /// Authorizes a captain request, yielding the bound principal.
    pub async fn authorize_captain(&self, token: &str) -> ServiceResult<Captain> {
        let claims = self.check_token(token).await?;
        self.resolve(CaptainRepository::new(self.pool), &claims)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use crate::database::models::{Fullname, NewUser};
    use crate::repositories::user_repository::UserRepository;
    use crate::test_utils::{test_jwt, test_pool};
    use uuid::Uuid;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn cookie_is_checked_before_bearer_header() {
        let mut headers = headers_with(header::COOKIE, "other=1; token=cookie-token");
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );

        assert_eq!(extract_token(&headers).as_deref(), Some("cookie-token"));
    }

    #[test]
    fn bearer_header_is_the_fallback() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer header-token");
        assert_eq!(extract_token(&headers).as_deref(), Some("header-token"));

        let headers = headers_with(header::AUTHORIZATION, "Basic abc");
        assert_eq!(extract_token(&headers), None);

        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn gate_resolves_a_valid_principal() {
        let pool = test_pool().await;
        let jwt = test_jwt();
        let user = UserRepository::new(&pool)
            .create_user(NewUser {
                id: Uuid::now_v7().to_string(),
                fullname: Fullname {
                    firstname: "Ann".to_string(),
                    lastname: None,
                },
                email: "a@b.com".to_string(),
                password_hash: "$2b$12$fake-hash".to_string(),
            })
            .await
            .unwrap();
        let token = jwt.issue(&user.id).unwrap();

        let gate = AuthGate::new(&pool, &jwt);
        let resolved = gate.authorize_user(&token).await.unwrap();
        assert_eq!(resolved.id, user.id);

        // The same subject is not a captain.
        let error = gate.authorize_captain(&token).await.unwrap_err();
        assert!(matches!(error, ServiceError::Unauthorized));
    }

    #[tokio::test]
    async fn gate_rejects_bad_tokens() {
        let pool = test_pool().await;
        let jwt = test_jwt();
        let gate = AuthGate::new(&pool, &jwt);

        // Garbage token.
        let error = gate.authorize_user("not-a-token").await.unwrap_err();
        assert!(matches!(error, ServiceError::Unauthorized));

        // Valid signature, but no such principal.
        let token = jwt.issue("ghost-id").unwrap();
        let error = gate.authorize_user(&token).await.unwrap_err();
        assert!(matches!(error, ServiceError::Unauthorized));

        // Revoked token.
        RevokedTokenRepository::new(&pool)
            .revoke(&token)
            .await
            .unwrap();
        let error = gate.authorize_user(&token).await.unwrap_err();
        assert!(matches!(error, ServiceError::Unauthorized));
    }
}
