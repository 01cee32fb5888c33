//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::{DomainError, NewUser, RepoResult, User, UserChanges, UserId, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, image, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, image, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, image, created_at, updated_at
            FROM users
            WHERE email = $1 AND password_hash = $2
            ",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, image, created_at, updated_at
            FROM users
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_username_or_email(&self, username: &str, email: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE username = $1 OR email = $2
            ",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, username, email, bio, image, created_at, updated_at
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IdentityTaken))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                bio = CASE WHEN $6 THEN $4 ELSE bio END,
                image = CASE WHEN $7 THEN $5 ELSE image END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, email, bio, image, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(changes.bio.as_ref().and_then(Option::as_deref))
        .bind(changes.image.as_ref().and_then(Option::as_deref))
        .bind(changes.bio.is_some())
        .bind(changes.image.is_some())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::IdentityTaken))?;

        model.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete_by_email(&self, email: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_db_error)
    }
}
