//! Authentication service
//!
//! Handles account creation, credential checks, session tokens and the
//! account lifecycle (lookup, update, delete).

use conduit_common::{hash_password, AppError, Claims};
use conduit_core::{NewUser, User, UserChanges, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::PublicUserView;

use super::context::ServiceContext;
use super::error::{NotFoundContext, ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account and return its public view with a fresh token.
    ///
    /// Nothing is written unless neither the username nor the email is taken
    /// and the input is structurally valid, checked in that order. A
    /// concurrent signup that slips past the pre-check is rejected by the
    /// store's unique index and reported the same way.
    #[instrument(skip(self, new_user), fields(username = %new_user.username, email = %new_user.email))]
    pub async fn create_account(&self, new_user: NewUser) -> ServiceResult<PublicUserView> {
        let taken = self
            .ctx
            .user_repo()
            .count_by_username_or_email(&new_user.username, &new_user.email)
            .await?;
        if taken > 0 {
            warn!("Signup rejected: username or email taken");
            return Err(ServiceError::identity_taken());
        }

        if let Err(errors) = new_user.validate() {
            warn!("Signup rejected: invalid input");
            return Err(ServiceError::invalid_input(&errors));
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "Account created");

        self.view_with_token(&user)
    }

    /// Find the account matching both email and password.
    ///
    /// Absence does not say which of the two was wrong.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<Option<User>> {
        let password_hash = hash_password(password)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_credentials(email, &password_hash)
            .await?;
        Ok(user)
    }

    /// Authenticate and issue a session token
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<PublicUserView> {
        let user = self.authenticate(email, password).await?.ok_or_else(|| {
            warn!("Login failed");
            ServiceError::App(AppError::InvalidCredentials)
        })?;

        info!(user_id = %user.id, "User logged in");
        self.view_with_token(&user)
    }

    /// Sign a session token for `user`
    pub fn issue_token(&self, user: &User) -> ServiceResult<String> {
        Ok(self.ctx.token_service().issue(user)?)
    }

    /// Look up by id; a missing account is reported as an identity failure
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: UserId) -> ServiceResult<PublicUserView> {
        let user = self.load(id).await?;
        self.view_with_token(&user)
    }

    /// Look up by email; a missing account is a plain 404
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<PublicUserView> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email, NotFoundContext::Lookup))?;
        self.view_with_token(&user)
    }

    /// Every account, without tokens
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<PublicUserView>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(PublicUserView::from).collect())
    }

    /// Merge the provided fields into the account.
    ///
    /// Username and email changes are checked only by the store's unique
    /// index; a collision comes back as the usual validation conflict.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: UserId, changes: UserChanges) -> ServiceResult<PublicUserView> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let user = self
            .ctx
            .user_repo()
            .update(id, &changes)
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::NotFound { resource, id, .. } => ServiceError::NotFound {
                    resource,
                    id,
                    context: NotFoundContext::Authentication,
                },
                other => other,
            })?;

        info!(user_id = %user.id, identity = changes.touches_identity(), "Account updated");
        self.view_with_token(&user)
    }

    /// Remove every account with this email; zero is not an error
    #[instrument(skip(self))]
    pub async fn delete_by_email(&self, email: &str) -> ServiceResult<u64> {
        let deleted = self.ctx.user_repo().delete_by_email(email).await?;
        info!(deleted, "Delete by email");
        Ok(deleted)
    }

    /// Resolve the account behind a decoded session token
    #[instrument(skip(self, claims), fields(user_id = %claims.id))]
    pub async fn current_user(&self, claims: &Claims) -> ServiceResult<PublicUserView> {
        self.find_by_id(claims.user_id()).await
    }

    async fn load(&self, id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id, NotFoundContext::Authentication))
    }

    fn view_with_token(&self, user: &User) -> ServiceResult<PublicUserView> {
        let token = self.issue_token(user)?;
        Ok(PublicUserView::from(user).with_token(token))
    }
}
