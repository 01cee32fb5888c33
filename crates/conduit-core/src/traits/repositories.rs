//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Article, AuthorSummary, NewUser, User, UserChanges};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Durable storage of user accounts.
///
/// Implementations must enforce uniqueness of `username` and `email` at the
/// storage level and report a violation as [`DomainError::IdentityTaken`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find the user whose email and password hash both match exactly
    async fn find_by_credentials(&self, email: &str, password_hash: &str)
        -> RepoResult<Option<User>>;

    /// List every user, ordered by id ascending
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Count users whose username or email matches either argument
    async fn count_by_username_or_email(&self, username: &str, email: &str) -> RepoResult<i64>;

    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Merge the provided fields into an existing user and return the result
    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User>;

    /// Hard delete every user with this email, returning the number removed
    async fn delete_by_email(&self, email: &str) -> RepoResult<u64>;

    /// Check storage connectivity
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Read-only access to authored articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles by one author, ordered by creation time ascending
    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Article>>;

    /// Number of articles by one author
    async fn count_by_author(&self, author_id: UserId) -> RepoResult<i64>;

    /// The author's earliest article, if any
    async fn find_earliest_by_author(&self, author_id: UserId) -> RepoResult<Option<Article>>;

    /// Count, favorite total, and first creation time for every author with content
    async fn author_summaries(&self) -> RepoResult<Vec<AuthorSummary>>;
}
