//! Admin routes: statistics, user listing, export, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use database::{admin, DatabaseStats, UserExport, UserInfo};

/// Get usage statistics.
pub async fn stats_api(State(state): State<AppState>) -> Result<Json<DatabaseStats>> {
    let stats = admin::stats(state.db.pool()).await?;
    Ok(Json(stats))
}

/// List all registered accounts.
pub async fn users_api(State(state): State<AppState>) -> Result<Json<Vec<UserInfo>>> {
    let users = admin::list_users(state.db.pool()).await?;
    Ok(Json(users))
}

/// Export all data for one user.
pub async fn export_api(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserExport>> {
    let export = admin::export_user(state.db.pool(), &username)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("unknown user: {username}")))?;

    Ok(Json(export))
}

/// Delete a user and all their data.
pub async fn delete_api(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode> {
    admin::delete_user(state.db.pool(), &username).await?;
    Ok(StatusCode::NO_CONTENT)
}
