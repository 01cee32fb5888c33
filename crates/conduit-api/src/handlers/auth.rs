//! Authentication handlers
//!
//! Endpoints for account creation and login.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use conduit_service::dto::{LoginRequest, RegisterRequest, UserEnvelope, UserResponse};
use conduit_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create an account
///
/// POST /api/users
///
/// Structural checks run inside the service so that they report the same
/// conflict shape as a taken username.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<UserEnvelope<RegisterRequest>>, JsonRejection>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let Json(body) = body.map_err(|e| ApiError::invalid_body(e.body_text()))?;
    let service = AuthService::new(state.service_context());
    let view = service.create_account(body.user.into()).await?;
    Ok(Created(Json(view.into())))
}

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserEnvelope<LoginRequest>>,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let view = service.login(&body.user.email, &body.user.password).await?;
    Ok(Json(view.into()))
}
