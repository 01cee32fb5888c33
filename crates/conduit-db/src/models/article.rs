//! Article database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author_id: i64,
    pub favorites_count: i32,
    pub created_at: DateTime<Utc>,
}

/// One row of the per-author aggregate query
#[derive(Debug, Clone, FromRow)]
pub struct AuthorSummaryModel {
    pub author_id: i64,
    pub article_count: i64,
    pub favorite_count: i64,
    pub first_article_at: Option<DateTime<Utc>>,
}
