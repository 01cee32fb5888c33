//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Suffix unique across test runs sharing one database
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        chrono::Utc::now().timestamp_millis(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Request bodies are wrapped in a `user` object
#[derive(Debug, Serialize, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

impl<T> UserEnvelope<T> {
    pub fn new(user: T) -> Self {
        Self { user }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Public account view
#[derive(Debug, Deserialize)]
pub struct UserView {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserView>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub username: String,
    pub profile_link: String,
    pub article_count: i64,
    pub favorite_count: i64,
    pub first_article_date: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
