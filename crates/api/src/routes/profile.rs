//! Health profile read and upsert.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::validation;
use database::{profile, Profile, ProfileUpdate};

/// Profile upsert request body. Omitted fields are stored as unset, not
/// preserved from the previous write.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub chronic_conditions: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

/// Get a user's profile.
pub async fn get_profile_api(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Profile>> {
    let record = profile::get_profile(state.db.pool(), &username)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no profile for {username}")))?;

    Ok(Json(record))
}

/// Create or replace a user's profile.
pub async fn put_profile_api(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<ProfileRequest>,
) -> Result<StatusCode> {
    if let Some(age) = request.age {
        validation::validate_age(age)?;
    }
    if let Some(ref blood_type) = request.blood_type {
        validation::validate_blood_type(blood_type)?;
    }

    let update = ProfileUpdate {
        age: request.age,
        blood_type: request.blood_type,
        allergies: request.allergies,
        chronic_conditions: request.chronic_conditions,
        emergency_contact: request.emergency_contact,
    };

    profile::upsert_profile(state.db.pool(), &username, &update).await?;

    Ok(StatusCode::NO_CONTENT)
}
