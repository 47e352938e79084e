//! Rider account business logic.

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::api::users::models::{LoginUserRequest, RegisterUserRequest, UserAuthResponse};
use crate::database::models::{Fullname, NewUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PrincipalRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    jwt: &'a JwtUtils,
}

impl<'a> UserService<'a> {
    pub fn new(pool: &'a SqlitePool, jwt: &'a JwtUtils) -> Self {
        Self { pool, jwt }
    }

    /// Registers a new rider and issues their first session token.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Validation failures (every violation reported)
    /// - An email that is already registered
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<UserAuthResponse> {
        request.validate().map_err(ServiceError::from_validation)?;

        let repo = UserRepository::new(self.pool);
        if repo.email_exists(&request.email).await? {
            return Err(ServiceError::already_exists("User", &request.email));
        }

        let password_hash = password::hash_password(&request.password).await?;
        let user = repo
            .create_user(NewUser {
                id: Uuid::now_v7().to_string(),
                fullname: Fullname {
                    firstname: request.fullname.firstname,
                    lastname: request.fullname.lastname,
                },
                email: request.email,
                password_hash,
            })
            .await?;

        let token = self.issue_token(&user.id)?;
        Ok(UserAuthResponse { token, user })
    }

    /// Authenticates a rider. An unknown email and a wrong password are
    /// indistinguishable in the result.
    pub async fn login(&self, request: LoginUserRequest) -> ServiceResult<UserAuthResponse> {
        request.validate().map_err(ServiceError::from_validation)?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .find_by_email_with_secret(&request.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &user.password_hash).await? {
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.issue_token(&user.id)?;
        let user = User {
            password_hash: String::new(),
            ..user
        };

        Ok(UserAuthResponse { token, user })
    }

    fn issue_token(&self, principal_id: &str) -> ServiceResult<String> {
        self.jwt
            .issue(principal_id)
            .map_err(|err| ServiceError::internal_error(format!("token issuance failed: {err}")))
    }
}
