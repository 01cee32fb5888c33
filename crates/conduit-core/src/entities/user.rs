//! User entity - an account on the publishing platform

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::value_objects::UserId;

/// Persisted user account.
///
/// The password hash is deliberately not part of the entity; it only ever
/// crosses the repository boundary as a lookup key or an insert value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Link to the user's public profile page
    pub fn profile_link(&self) -> String {
        format!("/profiles/{}", self.username)
    }

    /// Apply a partial update; only the provided fields change
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(username) = &changes.username {
            self.username.clone_from(username);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(bio) = &changes.bio {
            self.bio.clone_from(bio);
        }
        if let Some(image) = &changes.image {
            self.image.clone_from(image);
        }
        self.updated_at = Utc::now();
    }
}

/// Account about to be created, checked structurally before any write
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Partial field set for an account update
///
/// `None` leaves a field unchanged. For the nullable profile fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.bio.is_none() && self.image.is_none()
    }

    /// True when the update touches a uniqueness-constrained field
    pub fn touches_identity(&self) -> bool {
        self.username.is_some() || self.email.is_some()
    }
}
