//! The symptom analysis flow: triage, AI suggestion, history write.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use advisor_core::{Language, SuggestionRequest};
use database::{history, DatabaseError};
use triage::{EmergencyContact, Severity};

/// Analysis request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Authenticated username, supplied by the session layer.
    pub username: String,
    /// Raw symptom text.
    pub symptoms: String,
    /// Free-text location.
    pub location: String,
    /// Response language for the suggestion text.
    #[serde(default)]
    pub language: Language,
}

/// Analysis response body.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Severity tier from keyword triage.
    pub severity: Severity,
    /// Human-readable advisory for the tier.
    pub advisory: &'static str,
    /// Emergency numbers for the entered location; only present for
    /// HIGH severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<&'static [EmergencyContact]>,
    /// Suggestion text from the AI provider (or its error string).
    pub suggestion: String,
    /// Whether the analysis was written to the user's history. False
    /// when the session identity no longer resolves to an account.
    pub recorded: bool,
}

/// Run the full analysis flow for one symptom entry.
pub async fn analyze_api(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    if request.symptoms.trim().is_empty() {
        return Err(ApiError::Validation(
            crate::validation::ValidationError::Empty("symptoms".to_string()),
        ));
    }
    if request.location.trim().is_empty() {
        return Err(ApiError::Validation(
            crate::validation::ValidationError::Empty("location".to_string()),
        ));
    }

    let severity = triage::assess(&request.symptoms);

    // Provider failure degrades to an error string; the analysis is
    // still returned and recorded, matching the tier that was computed.
    let suggestion = match state
        .advisor
        .suggest(SuggestionRequest::new(
            request.symptoms.as_str(),
            request.language,
        ))
        .await
    {
        Ok(suggestion) => suggestion.text,
        Err(e) => {
            warn!("Advisor failed: {}", e);
            format!("Error analyzing symptoms: {}", e)
        }
    };

    let recorded = match history::append_entry(
        state.db.pool(),
        &request.username,
        &request.symptoms,
        severity.as_str(),
        &suggestion,
        &request.location,
    )
    .await
    {
        Ok(()) => true,
        // Session identity and store can disagree (e.g. the account was
        // deleted mid-session). Surface the analysis anyway.
        Err(DatabaseError::UnknownUser { .. }) => false,
        Err(e) => return Err(e.into()),
    };

    let emergency_contacts = match severity {
        Severity::High => Some(triage::contacts_for(&request.location)),
        _ => None,
    };

    Ok(Json(AnalyzeResponse {
        severity,
        advisory: severity.advisory(),
        emergency_contacts,
        suggestion,
        recorded,
    }))
}
