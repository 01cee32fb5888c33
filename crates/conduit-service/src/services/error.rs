//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::collections::BTreeMap;
use std::fmt;

use conduit_common::AppError;
use conduit_core::DomainError;
use validator::ValidationErrors;

/// Detail attached to a uniqueness failure on signup or update
pub const IDENTITY_TAKEN_DETAIL: &str = "Username and email must be unique.";

const VALIDATION_FAILED: &str = "Input data validation failed";

/// Where a failed lookup happened, which decides how it is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundContext {
    /// Resolving the caller's own identity; reported like a failed credential
    Authentication,
    /// Looking up someone else; reported as a plain missing resource
    Lookup,
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Write rejected before or by storage; no partial write happened
    ValidationConflict {
        message: String,
        errors: BTreeMap<String, String>,
    },

    /// Lookup by id or email found nothing
    NotFound {
        resource: &'static str,
        id: String,
        context: NotFoundContext,
    },

    /// Application error (auth, token, etc.)
    App(AppError),

    /// Domain or storage failure passed through unchanged
    Domain(DomainError),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationConflict { message, .. } => write!(f, "{message}"),
            Self::NotFound { resource, id, .. } => write!(f, "{resource} not found: {id}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Domain(e) => write!(f, "{e}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Username or email already belongs to another account
    pub fn identity_taken() -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("username".to_string(), IDENTITY_TAKEN_DETAIL.to_string());
        Self::ValidationConflict {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    /// Structural validation failed; one message per offending field
    pub fn invalid_input(validation: &ValidationErrors) -> Self {
        let errors = validation
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map_or_else(|| "is invalid".to_string(), ToString::to_string);
                (field.to_string(), message)
            })
            .collect();
        Self::ValidationConflict {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl fmt::Display, context: NotFoundContext) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
            context,
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Field-level detail map, if this error carries one
    pub fn details(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::ValidationConflict { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationConflict { .. } => 400,
            Self::NotFound { context: NotFoundContext::Authentication, .. } => 401,
            Self::NotFound { context: NotFoundContext::Lookup, .. } => 404,
            Self::App(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_conflict() {
                    400
                } else {
                    500
                }
            }
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::ValidationConflict { .. } => "VALIDATION_CONFLICT",
            Self::NotFound { context: NotFoundContext::Authentication, .. } => "UNKNOWN_IDENTITY",
            Self::NotFound { context: NotFoundContext::Lookup, .. } => "NOT_FOUND",
            Self::App(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::IdentityTaken => Self::identity_taken(),
            DomainError::UserNotFound(id) => Self::not_found("User", id, NotFoundContext::Lookup),
            other => Self::Domain(other),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => Self::from(e),
            other => Self::App(other),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
