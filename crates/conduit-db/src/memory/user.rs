//! In-memory implementation of UserRepository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use conduit_core::{DomainError, NewUser, RepoResult, User, UserChanges, UserId, UserRepository};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<i64, StoredUser>,
    next_id: i64,
}

impl UserTable {
    /// Unique index check over username and email, ignoring `except`
    fn collides(&self, username: &str, email: &str, except: Option<i64>) -> bool {
        self.rows.iter().any(|(id, row)| {
            Some(*id) != except && (row.user.username == username || row.user.email == email)
        })
    }
}

/// User store held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id.into_inner()).map(|row| row.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|row| row.user.email == email)
            .map(|row| row.user.clone()))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|row| row.user.email == email && row.password_hash == password_hash)
            .map(|row| row.user.clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().map(|row| row.user.clone()).collect())
    }

    async fn count_by_username_or_email(&self, username: &str, email: &str) -> RepoResult<i64> {
        let table = self.table.read().await;
        let count = table
            .rows
            .values()
            .filter(|row| row.user.username == username || row.user.email == email)
            .count();
        Ok(count as i64)
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut guard = self.table.write().await;
        let table = &mut *guard;
        if table.collides(&user.username, &user.email, None) {
            return Err(DomainError::IdentityTaken);
        }

        table.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(table.next_id),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(
            table.next_id,
            StoredUser {
                user: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(created)
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User> {
        let mut table = self.table.write().await;
        let key = id.into_inner();

        let mut updated = table
            .rows
            .get(&key)
            .map(|row| row.user.clone())
            .ok_or(DomainError::UserNotFound(id))?;
        updated.apply(changes);

        if table.collides(&updated.username, &updated.email, Some(key)) {
            return Err(DomainError::IdentityTaken);
        }

        if let Some(row) = table.rows.get_mut(&key) {
            row.user = updated.clone();
        }
        Ok(updated)
    }

    async fn delete_by_email(&self, email: &str) -> RepoResult<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|_, row| row.user.email != email);
        Ok((before - table.rows.len()) as u64)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
