//! JWT token utilities for authentication.
//!
//! Provides session token creation and validation for both principal types.
//! Tokens carry only the principal id and timestamps; verification is
//! stateless and never touches the store.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Principal id.
    pub sub: String,
    /// Token expiration timestamp.
    pub exp: usize,
    /// Token issued at timestamp.
    pub iat: usize,
}

/// Failure modes of token verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    InvalidSignature,
    Expired,
    Malformed,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::InvalidSignature => write!(f, "invalid token signature"),
            TokenError::Expired => write!(f, "token expired"),
            TokenError::Malformed => write!(f, "malformed token"),
        }
    }
}

impl std::error::Error for TokenError {}

/// JWT token utility for creating and validating session tokens.
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from application configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_secret(&config.jwt_secret, config.jwt_expires_in_seconds)
    }

    /// Build directly from a secret, bypassing `Config`.
    pub fn with_secret(secret: &str, expires_in_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expires_in_seconds,
        }
    }

    /// Lifetime of issued tokens, also used as the session cookie max-age.
    pub fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }

    /// Issue a signed token binding the principal id.
    pub fn issue(&self, principal_id: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: principal_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Malformed)
    }

    /// Validate and decode a token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}
