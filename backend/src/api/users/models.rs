//! Request and response models for the rider API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::database::models::User;

/// Display name as submitted at registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FullnameInput {
    #[validate(length(min = 3, message = "First name must be at least 3 characters long"))]
    pub firstname: String,
    #[validate(length(min = 3, message = "Last name must be at least 3 characters long"))]
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(nested)]
    pub fullname: FullnameInput,
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Body returned by register and login: the issued token plus the principal.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserAuthResponse {
    pub token: String,
    pub user: User,
}
