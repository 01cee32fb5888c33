//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use conduit_core::UserId;

use crate::response::ApiError;

/// `:id` parsed as a user id
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        UserId::parse(&raw)
            .map(UserIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid user id format"))
    }
}

/// `:email` path segment
#[derive(Debug, Clone)]
pub struct EmailPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for EmailPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let email = raw.trim();
        if email.is_empty() {
            return Err(ApiError::invalid_path("Email must not be empty"));
        }
        Ok(EmailPath(email.to_string()))
    }
}
