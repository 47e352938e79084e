//! Module for core business logic services.
//!
//! Services orchestrate validation, hashing, credential-store writes, and
//! token issuance; handlers stay thin and only translate the outcome.

pub mod captain_service;
pub mod user_service;
