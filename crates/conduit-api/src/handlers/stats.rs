//! Statistics handlers

use axum::{extract::State, Json};
use conduit_service::dto::{RosterEntryResponse, UserStatisticsResponse};
use conduit_service::StatsService;

use crate::extractors::UserIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Ranked roster of every user
///
/// GET /api/user/roster
pub async fn get_roster(State(state): State<AppState>) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let service = StatsService::new(state.service_context());
    let roster = service.full_roster().await?;
    Ok(Json(roster.into_iter().map(RosterEntryResponse::from).collect()))
}

/// Statistics for one user
///
/// GET /api/users/:user/stats
pub async fn get_user_stats(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<UserStatisticsResponse>> {
    let service = StatsService::new(state.service_context());
    let stats = service.stats_for(user_id).await?;
    Ok(Json(stats.into()))
}
