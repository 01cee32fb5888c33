//! Derived engagement views - computed on demand, never persisted

use chrono::{DateTime, SecondsFormat, Utc};

use super::article::AuthorSummary;
use super::user::User;

/// Engagement statistics for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatistics {
    pub username: String,
    pub article_count: i64,
    pub favorite_count: i64,
    pub first_article_date: Option<DateTime<Utc>>,
}

impl UserStatistics {
    pub fn new(user: &User, summary: &AuthorSummary) -> Self {
        Self {
            username: user.username.clone(),
            article_count: summary.article_count,
            favorite_count: summary.favorite_count,
            first_article_date: summary.first_article_at,
        }
    }
}

/// One ranked row of the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub stats: UserStatistics,
    pub profile_link: String,
}

impl RosterEntry {
    pub fn new(user: &User, summary: &AuthorSummary) -> Self {
        Self {
            stats: UserStatistics::new(user, summary),
            profile_link: user.profile_link(),
        }
    }

    #[inline]
    pub fn favorite_count(&self) -> i64 {
        self.stats.favorite_count
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-02T03:04:05.678Z`
pub fn format_iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
