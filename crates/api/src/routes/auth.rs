//! Login route handler.
//!
//! Credentials are checked by plain equality against the seed dataset;
//! there is no registration, no password reset and no logout. A token
//! simply expires fifteen minutes after login.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sunglasses_core::Email;

use crate::error::{ApiError, Result};
use crate::models::UserName;
use crate::state::AppState;

/// Login request body.
///
/// Both fields default to empty so a missing field and an empty field
/// are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub name: UserName,
    pub email: Email,
    pub token: String,
    pub last_updated: DateTime<Utc>,
}

/// Exchange credentials for an opaque login token.
///
/// Each successful login issues a fresh session; earlier tokens stay
/// valid until they expire on their own.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Incomplete login information provided".to_string(),
        ));
    }

    let user = state
        .users()
        .find_by_credentials(&request.username, &request.password)?
        .ok_or_else(|| {
            tracing::warn!(username = %request.username, "Login failed");
            ApiError::Unauthorized("Invalid login credentials".to_string())
        })?;

    let session = state.sessions().create(&user.email)?;

    Ok(Json(LoginResponse {
        name: user.name,
        email: user.email,
        token: session.token,
        last_updated: session.created_at,
    }))
}
