//! Request and response models for the captain API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::users::models::FullnameInput;
use crate::database::models::{Captain, VehicleType};

/// Vehicle attributes as submitted at registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleInput {
    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,
    #[validate(length(min = 3, message = "Plate must be at least 3 characters long"))]
    pub plate: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i64,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCaptainRequest {
    #[validate(nested)]
    pub fullname: FullnameInput,
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[validate(nested)]
    pub vehicle: VehicleInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginCaptainRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Body returned by register and login: the issued token plus the principal.
#[derive(Debug, Serialize, Deserialize)]
pub struct CaptainAuthResponse {
    pub token: String,
    pub captain: Captain,
}
