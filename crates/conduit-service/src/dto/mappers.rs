//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use conduit_core::{format_iso_millis, RosterEntry, User, UserStatistics};

use super::responses::{PublicUserView, RosterEntryResponse, UserStatisticsResponse};

impl From<&User> for PublicUserView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            token: None,
        }
    }
}

impl From<User> for PublicUserView {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&UserStatistics> for UserStatisticsResponse {
    fn from(stats: &UserStatistics) -> Self {
        Self {
            username: stats.username.clone(),
            article_count: stats.article_count,
            favorite_count: stats.favorite_count,
            first_article_date: stats.first_article_date.map(format_iso_millis),
        }
    }
}

impl From<UserStatistics> for UserStatisticsResponse {
    fn from(stats: UserStatistics) -> Self {
        Self::from(&stats)
    }
}

impl From<RosterEntry> for RosterEntryResponse {
    fn from(entry: RosterEntry) -> Self {
        Self {
            first_article_date: entry
                .stats
                .first_article_date
                .map(format_iso_millis)
                .unwrap_or_default(),
            username: entry.stats.username,
            profile_link: entry.profile_link,
            article_count: entry.stats.article_count,
            favorite_count: entry.stats.favorite_count,
        }
    }
}
