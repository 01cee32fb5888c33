//! Article model -> entity mappers

use conduit_core::{Article, AuthorSummary, UserId};

use crate::models::{ArticleModel, AuthorSummaryModel};

impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: model.id,
            slug: model.slug,
            title: model.title,
            author_id: UserId::new(model.author_id),
            favorites_count: i64::from(model.favorites_count),
            created_at: model.created_at,
        }
    }
}

impl From<AuthorSummaryModel> for AuthorSummary {
    fn from(model: AuthorSummaryModel) -> Self {
        AuthorSummary {
            author_id: UserId::new(model.author_id),
            article_count: model.article_count,
            favorite_count: model.favorite_count,
            first_article_at: model.first_article_at,
        }
    }
}
