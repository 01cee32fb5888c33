//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::{Article, ArticleRepository, AuthorSummary, RepoResult, UserId};

use crate::models::{ArticleModel, AuthorSummaryModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Article>> {
        let results = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, slug, title, author_id, favorites_count, created_at
            FROM articles
            WHERE author_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Article::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM articles WHERE author_id = $1
            ",
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_earliest_by_author(&self, author_id: UserId) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, slug, title, author_id, favorites_count, created_at
            FROM articles
            WHERE author_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            ",
        )
        .bind(author_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn author_summaries(&self) -> RepoResult<Vec<AuthorSummary>> {
        let results = sqlx::query_as::<_, AuthorSummaryModel>(
            r"
            SELECT author_id,
                   COUNT(*)::BIGINT AS article_count,
                   COALESCE(SUM(favorites_count), 0)::BIGINT AS favorite_count,
                   MIN(created_at) AS first_article_at
            FROM articles
            GROUP BY author_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AuthorSummary::from).collect())
    }
}
