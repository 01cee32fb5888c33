//! Statistics service
//!
//! Derives read-only engagement figures from the article store.

use std::collections::HashMap;

use conduit_core::{AuthorSummary, RosterEntry, UserId, UserStatistics};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{NotFoundContext, ServiceError, ServiceResult};

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Statistics for one existing user.
    ///
    /// The three article queries run concurrently and are not read from a
    /// single snapshot.
    #[instrument(skip(self))]
    pub async fn stats_for(&self, user_id: UserId) -> ServiceResult<UserStatistics> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id, NotFoundContext::Lookup))?;

        let articles = self.ctx.article_repo();
        let (article_count, authored, earliest) = tokio::try_join!(
            articles.count_by_author(user_id),
            articles.find_by_author(user_id),
            articles.find_earliest_by_author(user_id),
        )?;

        let summary = AuthorSummary {
            author_id: user_id,
            article_count,
            favorite_count: authored.iter().map(|a| a.favorites_count).sum(),
            first_article_at: earliest.map(|a| a.created_at),
        };

        Ok(UserStatistics::new(&user, &summary))
    }

    /// Every user ranked by total favorites, highest first.
    ///
    /// Users come from the store in id order and the sort is stable, so
    /// equal totals keep account creation order.
    #[instrument(skip(self))]
    pub async fn full_roster(&self) -> ServiceResult<Vec<RosterEntry>> {
        let (users, summaries) = tokio::try_join!(
            self.ctx.user_repo().find_all(),
            self.ctx.article_repo().author_summaries(),
        )?;

        let mut by_author: HashMap<UserId, AuthorSummary> =
            summaries.into_iter().map(|s| (s.author_id, s)).collect();

        let mut roster: Vec<RosterEntry> = users
            .iter()
            .map(|user| {
                let summary = by_author
                    .remove(&user.id)
                    .unwrap_or_else(|| AuthorSummary::empty(user.id));
                RosterEntry::new(user, &summary)
            })
            .collect();

        roster.sort_by(|a, b| b.favorite_count().cmp(&a.favorite_count()));

        debug!(entries = roster.len(), "Roster computed");
        Ok(roster)
    }
}
