//! User handlers
//!
//! Endpoints for the current account and account administration.

use axum::{extract::State, Json};
use conduit_service::dto::{DeleteResponse, UpdateUserRequest, UserEnvelope, UserResponse, UsersResponse};
use conduit_service::AuthService;

use crate::extractors::{AuthUser, EmailPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the account behind the session token
///
/// GET /api/user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let view = service.current_user(&auth.claims).await?;
    Ok(Json(view.into()))
}

/// Update the current account
///
/// PUT /api/user
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<UserEnvelope<UpdateUserRequest>>,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let view = service.update(auth.user_id(), body.user.into()).await?;
    Ok(Json(view.into()))
}

/// List every account
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<UsersResponse>> {
    let service = AuthService::new(state.service_context());
    let users = service.find_all().await?;
    Ok(Json(users.into()))
}

/// Delete every account with the given email
///
/// DELETE /api/users/:user
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    EmailPath(email): EmailPath,
) -> ApiResult<Json<DeleteResponse>> {
    tracing::info!(by = %auth.user_id(), "Administrative delete by email");
    let service = AuthService::new(state.service_context());
    let deleted = service.delete_by_email(&email).await?;
    Ok(Json(DeleteResponse { deleted }))
}
