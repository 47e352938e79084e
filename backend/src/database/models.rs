//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and
//! retrieved from the database. The stored secret is never serialized, and
//! default read projections blank it out entirely; login is the only path
//! that reads it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Display name shared by both principal types.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fullname {
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// A rider account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    #[sqlx(flatten)]
    pub fullname: Fullname,
    pub email: String,
    /// Bcrypt hash. Blank in default read projections.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write-side record for a new user. The secret arrives already hashed by
/// the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub fullname: Fullname,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CaptainStatus {
    Active,
    Inactive,
}

/// Vehicle attributes carried by captain accounts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub color: String,
    pub plate: String,
    pub capacity: i64,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
}

/// A driver account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Captain {
    pub id: String,
    #[sqlx(flatten)]
    pub fullname: Fullname,
    pub email: String,
    /// Bcrypt hash. Blank in default read projections.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[sqlx(flatten)]
    pub vehicle: Vehicle,
    pub status: CaptainStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write-side record for a new captain.
#[derive(Debug, Clone)]
pub struct NewCaptain {
    pub id: String,
    pub fullname: Fullname,
    pub email: String,
    pub password_hash: String,
    pub vehicle: Vehicle,
}

/// A session token invalidated before its natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    pub token: String,
    pub created_at: DateTime<Utc>,
}
