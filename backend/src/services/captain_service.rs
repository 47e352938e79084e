//! Captain account business logic.
//!
//! Same orchestration as the rider service with the captain-specific vehicle
//! payload carried through registration.

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::api::captains::models::{
    CaptainAuthResponse, LoginCaptainRequest, RegisterCaptainRequest,
};
use crate::database::models::{Captain, Fullname, NewCaptain, Vehicle};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PrincipalRepository;
use crate::repositories::captain_repository::CaptainRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password;

pub struct CaptainService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    jwt: &'a JwtUtils,
}

impl<'a> CaptainService<'a> {
    pub fn new(pool: &'a SqlitePool, jwt: &'a JwtUtils) -> Self {
        Self { pool, jwt }
    }

    /// Registers a new captain and issues their first session token.
    pub async fn register(
        &self,
        request: RegisterCaptainRequest,
    ) -> ServiceResult<CaptainAuthResponse> {
        request.validate().map_err(ServiceError::from_validation)?;

        let repo = CaptainRepository::new(self.pool);
        if repo.email_exists(&request.email).await? {
            return Err(ServiceError::already_exists("Captain", &request.email));
        }

        let password_hash = password::hash_password(&request.password).await?;
        let captain = repo
            .create_captain(NewCaptain {
                id: Uuid::now_v7().to_string(),
                fullname: Fullname {
                    firstname: request.fullname.firstname,
                    lastname: request.fullname.lastname,
                },
                email: request.email,
                password_hash,
                vehicle: Vehicle {
                    color: request.vehicle.color,
                    plate: request.vehicle.plate,
                    capacity: request.vehicle.capacity,
                    vehicle_type: request.vehicle.vehicle_type,
                },
            })
            .await?;

        let token = self.issue_token(&captain.id)?;
        Ok(CaptainAuthResponse { token, captain })
    }

    /// Authenticates a captain. An unknown email and a wrong password are
    /// indistinguishable in the result.
    pub async fn login(&self, request: LoginCaptainRequest) -> ServiceResult<CaptainAuthResponse> {
        request.validate().map_err(ServiceError::from_validation)?;

        let repo = CaptainRepository::new(self.pool);
        let captain = repo
            .find_by_email_with_secret(&request.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &captain.password_hash).await? {
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.issue_token(&captain.id)?;
        let captain = Captain {
            password_hash: String::new(),
            ..captain
        };

        Ok(CaptainAuthResponse { token, captain })
    }

    fn issue_token(&self, principal_id: &str) -> ServiceResult<String> {
        self.jwt
            .issue(principal_id)
            .map_err(|err| ServiceError::internal_error(format!("token issuance failed: {err}")))
    }
}
