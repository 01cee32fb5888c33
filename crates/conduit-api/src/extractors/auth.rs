//! Authentication extractor
//!
//! Reads the session token from the `Authorization` header. Both the
//! `Token <jwt>` and `Bearer <jwt>` schemes are accepted.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use conduit_common::Claims;
use conduit_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller, decoded from a verified session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        self.claims.user_id()
    }
}

/// Pull the raw token out of an `Authorization` header value
fn token_from_header(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    let known = scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer");
    (known && !token.is_empty()).then_some(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::MissingAuth)?
            .to_str()
            .map_err(|_| ApiError::InvalidAuthFormat)?;

        let token = token_from_header(header).ok_or(ApiError::InvalidAuthFormat)?;

        let app_state = AppState::from_ref(state);
        let claims = app_state.token_service().decode(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected session token");
            ApiError::App(e)
        })?;

        Ok(AuthUser { claims })
    }
}
