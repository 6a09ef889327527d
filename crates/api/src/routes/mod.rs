//! Route handlers for the API server.

pub mod admin;
pub mod analyze;
pub mod auth;
pub mod health;
pub mod history;
pub mod hospitals;
pub mod profile;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Accounts
        .route("/api/accounts", post(auth::register))
        .route("/api/login", post(auth::login))
        // Per-user data
        .route(
            "/api/users/:username/profile",
            get(profile::get_profile_api).put(profile::put_profile_api),
        )
        .route("/api/users/:username/history", get(history::history_api))
        // Analysis flow
        .route("/api/analyze", post(analyze::analyze_api))
        .route("/api/hospitals", get(hospitals::hospitals_api))
        // Admin
        .route("/api/admin/stats", get(admin::stats_api))
        .route("/api/admin/users", get(admin::users_api))
        .route("/api/admin/users/:username/export", get(admin::export_api))
        .route("/api/admin/users/:username", delete(admin::delete_api))
}
