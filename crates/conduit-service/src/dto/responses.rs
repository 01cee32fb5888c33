//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Public view of an account; `token` is present when freshly issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUserView {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl PublicUserView {
    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

/// `{ "user": PublicUserView }`
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: PublicUserView,
}

impl From<PublicUserView> for UserResponse {
    fn from(user: PublicUserView) -> Self {
        Self { user }
    }
}

/// `{ "users": [...], "count": n }`
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<PublicUserView>,
    pub count: usize,
}

impl From<Vec<PublicUserView>> for UsersResponse {
    fn from(users: Vec<PublicUserView>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}

/// Number of accounts removed by a delete-by-email
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

// ============================================================================
// Statistics Responses
// ============================================================================

/// Engagement statistics for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatisticsResponse {
    pub username: String,
    pub article_count: i64,
    pub favorite_count: i64,
    /// ISO-8601 with milliseconds, `null` when the user has no articles
    pub first_article_date: Option<String>,
}

/// One ranked row of the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntryResponse {
    pub username: String,
    pub profile_link: String,
    pub article_count: i64,
    pub favorite_count: i64,
    /// ISO-8601 with milliseconds, empty when the user has no articles
    pub first_article_date: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status per backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
