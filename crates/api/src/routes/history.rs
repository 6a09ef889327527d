//! Symptom history reads.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;
use database::{history, HistoryEntry, DEFAULT_HISTORY_LIMIT};

/// Query parameters for history reads.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum entries to return.
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Get a user's most recent history entries, newest first.
///
/// Unknown users get an empty list, matching the store contract.
pub async fn history_api(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).max(0);
    let entries = history::list_entries(state.db.pool(), &username, limit).await?;

    Ok(Json(entries))
}
