//! Hospital search passthrough.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;
use hospital_locator::{Hospital, SearchStatus};

/// Query parameters for hospital search.
#[derive(Debug, Deserialize)]
pub struct HospitalsQuery {
    /// Free-text location to search near.
    pub location: String,
}

/// Hospital search response.
///
/// Locator failures are reported in-band with `status: "ERROR"` rather
/// than as an HTTP error, mirroring the geocoder boundary contract.
#[derive(Debug, Serialize)]
pub struct HospitalsResponse {
    pub status: &'static str,
    pub results: Vec<Hospital>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Search for hospitals near a location.
pub async fn hospitals_api(
    State(state): State<AppState>,
    Query(query): Query<HospitalsQuery>,
) -> Json<HospitalsResponse> {
    match state.locator.search(&query.location).await {
        Ok(search) => Json(HospitalsResponse {
            status: match search.status {
                SearchStatus::Ok => "OK",
                SearchStatus::ZeroResults => "ZERO_RESULTS",
            },
            results: search.results,
            error: None,
        }),
        Err(e) => {
            warn!("Hospital search failed: {}", e);
            Json(HospitalsResponse {
                status: "ERROR",
                results: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}
