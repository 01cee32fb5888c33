//! In-memory implementation of ArticleRepository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use conduit_core::{Article, ArticleRepository, AuthorSummary, RepoResult, UserId};

#[derive(Debug, Default)]
struct ArticleTable {
    rows: Vec<Article>,
    next_id: i64,
}

/// Article store held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    table: Arc<RwLock<ArticleTable>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article for `author_id` created at `created_at`
    ///
    /// Favorites are unsigned here, matching the `>= 0` check on the
    /// `articles` table.
    pub async fn publish(
        &self,
        author_id: UserId,
        title: &str,
        favorites_count: u32,
        created_at: DateTime<Utc>,
    ) -> Article {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let article = Article {
            id: table.next_id,
            slug: format!("{}-{}", title.to_lowercase().replace(' ', "-"), table.next_id),
            title: title.to_string(),
            author_id,
            favorites_count: i64::from(favorites_count),
            created_at,
        };
        table.rows.push(article.clone());
        article
    }

    fn by_author(rows: &[Article], author_id: UserId) -> Vec<Article> {
        let mut articles: Vec<Article> = rows
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        articles.sort_by_key(|a| (a.created_at, a.id));
        articles
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Article>> {
        let table = self.table.read().await;
        Ok(Self::by_author(&table.rows, author_id))
    }

    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64> {
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|a| a.author_id == author_id).count() as i64)
    }

    async fn find_earliest_by_author(&self, author_id: UserId) -> RepoResult<Option<Article>> {
        let table = self.table.read().await;
        Ok(Self::by_author(&table.rows, author_id).into_iter().next())
    }

    async fn author_summaries(&self) -> RepoResult<Vec<AuthorSummary>> {
        let table = self.table.read().await;

        let mut grouped: BTreeMap<UserId, Vec<Article>> = BTreeMap::new();
        for article in &table.rows {
            grouped
                .entry(article.author_id)
                .or_default()
                .push(article.clone());
        }

        Ok(grouped
            .into_iter()
            .map(|(author_id, articles)| AuthorSummary::from_articles(author_id, &articles))
            .collect())
    }
}
