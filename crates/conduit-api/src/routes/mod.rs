//! Route definitions
//!
//! All API routes are mounted under /api.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, stats, users};
use crate::state::AppState;

/// Create the main API router (health routes are separate)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(stats_routes())
}

/// Account creation and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(auth::register))
        .route("/users/login", post(auth::login))
}

/// Current user and account administration
///
/// `:user` is an email on DELETE and a numeric id under `/stats`; the router
/// needs one capture name per segment.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(users::get_current_user).put(users::update_current_user))
        .route("/users", get(users::list_users))
        .route("/users/:user", delete(users::delete_user))
}

fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/user/roster", get(stats::get_roster))
        .route("/users/:user/stats", get(stats::get_user_stats))
}
