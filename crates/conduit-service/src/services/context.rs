//! Service context - dependency container for services
//!
//! Holds the repository ports and the token signer needed by services.

use std::sync::Arc;

use conduit_common::TokenService;
use conduit_core::{ArticleRepository, RepoResult, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            article_repo,
            token_service,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the session token signer
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }

    /// Check that the credential store is reachable
    pub async fn health_check(&self) -> RepoResult<()> {
        self.user_repo.health_check().await
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_service", &self.token_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.article_repo
                .ok_or_else(|| ServiceError::internal("article_repo is required"))?,
            self.token_service
                .ok_or_else(|| ServiceError::internal("token_service is required"))?,
        ))
    }
}
