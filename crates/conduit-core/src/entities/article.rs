//! Article entity - authored content, read-only from the statistics side

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Authored article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author_id: UserId,
    pub favorites_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Per-author aggregate over all of that author's articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub author_id: UserId,
    pub article_count: i64,
    pub favorite_count: i64,
    pub first_article_at: Option<DateTime<Utc>>,
}

impl AuthorSummary {
    /// Summary for an author with no content
    pub fn empty(author_id: UserId) -> Self {
        Self {
            author_id,
            article_count: 0,
            favorite_count: 0,
            first_article_at: None,
        }
    }

    /// Fold a list of articles into a summary
    pub fn from_articles(author_id: UserId, articles: &[Article]) -> Self {
        Self {
            author_id,
            article_count: articles.len() as i64,
            favorite_count: articles.iter().map(|a| a.favorites_count).sum(),
            first_article_at: articles.iter().map(|a| a.created_at).min(),
        }
    }
}
