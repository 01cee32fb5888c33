//! Application error types
//!
//! Failures raised below the service layer: session tokens, credential
//! hashing, startup wiring, and domain errors passed up from storage.

use conduit_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Pool creation or migration failure at startup
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_conflict() => 400,
            Self::Domain(_) => 500,
        }
    }

    /// Machine-readable code for the error envelope
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}
