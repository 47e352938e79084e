//! Global application error types and handlers.
//!
//! This module defines the domain error taxonomy shared by repositories,
//! services, and the auth gate, plus the conversion from `validator` output
//! into itemized field violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field, e.g. `fullname.firstname`.
    pub field: String,
    pub message: String,
}

/// Generic service error used across all entities.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input. Carries every violation, not just the
    /// first one encountered.
    #[error("validation failed")]
    Validation { violations: Vec<FieldViolation> },

    /// Login failed. Kept generic so the response never reveals whether the
    /// email or the password was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The request could not be authorized. Missing, malformed, expired, and
    /// revoked tokens all collapse into this one variant.
    #[error("unauthorized")]
    Unauthorized,

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    /// The store could not be reached within its timeout.
    #[error("store unavailable: {source}")]
    StoreUnavailable {
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {source}")]
    Database {
        #[source]
        source: sqlx::Error,
    },

    #[error("internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Collects every violation out of a `validator` result, flattening
    /// nested structs into dotted field paths.
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(None, &errors, &mut violations);
        Self::Validation { violations }
    }
}

fn collect_violations(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldViolation>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    out.push(FieldViolation {
                        field: path.clone(),
                        message: failure
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string()),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        ) {
            ServiceError::StoreUnavailable { source: err }
        } else {
            ServiceError::Database { source: err }
        }
    }
}
