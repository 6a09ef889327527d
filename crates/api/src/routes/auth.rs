//! Account registration and login.
//!
//! Handlers only establish who the caller claims to be; session tracking
//! itself lives outside this service, which trusts the username supplied
//! on subsequent requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;
use crate::validation;
use database::models::ROLE_PATIENT;
use database::{account, User};

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public account view returned on success.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub username: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for AccountResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Register a new patient account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    validation::validate_username(&request.username)?;
    validation::validate_password(&request.password)?;

    let user = account::create_account(
        state.db.pool(),
        &request.username,
        &request.password,
        request.email.as_deref(),
        ROLE_PATIENT,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Authenticate an existing account.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountResponse>> {
    let user = account::authenticate(state.db.pool(), &request.username, &request.password).await?;

    Ok(Json(user.into()))
}
