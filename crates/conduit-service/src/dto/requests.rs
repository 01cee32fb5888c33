//! Request DTOs for API endpoints
//!
//! Bodies follow the `{ "user": { ... } }` envelope used by every account endpoint.

use conduit_core::{NewUser, UserChanges};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

/// `{ "user": T }` request body
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

impl<T: Validate> Validate for UserEnvelope<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.user.validate()
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Account creation request
///
/// Structural checks live on [`NewUser`] so they run inside the service,
/// before any write.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser::new(req.username, req.email, req.password)
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial update of the current user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

/// A key that is present, even as `null`, becomes `Some`; a missing key
/// falls back to `None` through `#[serde(default)]`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        UserChanges {
            username: req.username,
            email: req.email,
            bio: req.bio,
            image: req.image,
        }
    }
}
