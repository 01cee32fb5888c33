//! Session token utilities
//!
//! Issues and verifies stateless HS256 tokens using the `jsonwebtoken` crate.
//! The signing secret is owned by [`TokenService`] and injected at construction.

use chrono::{DateTime, Days, TimeZone, Utc};
use conduit_core::{User, UserId};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default token lifetime in calendar days
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 60;

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub username: String,
    pub id: UserId,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Get the subject's user ID
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.id
    }

    /// Expiration instant as a timestamp
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

}

/// Token service for encoding and decoding session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_days: u64,
}

impl TokenService {
    /// Create a new token service with the given secret and lifetime
    #[must_use]
    pub fn new(secret: &str, ttl_days: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_days,
        }
    }

    /// Token lifetime in calendar days
    #[must_use]
    pub fn ttl_days(&self) -> u64 {
        self.ttl_days
    }

    /// Issue a token for a user, expiring `ttl_days` calendar days from now
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if the current instant were `now`
    ///
    /// # Errors
    /// Returns an error if the expiry overflows or encoding fails
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now
            .checked_add_days(Days::new(self.ttl_days))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Token expiry out of range")))?;

        let claims = Claims {
            email: user.email.clone(),
            username: user.username.clone(),
            id: user.id,
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns an error if the signature does not verify or the token is expired
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_days", &self.ttl_days)
            .finish_non_exhaustive()
    }
}
