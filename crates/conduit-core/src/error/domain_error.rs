//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// Raised by the store's unique constraint on username or email
    #[error("Username or email already in use")]
    IdentityTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::IdentityTaken => "IDENTITY_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::IdentityTaken)
    }
}
