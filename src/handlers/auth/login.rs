use axum::{extract::State, response::Json};
use serde::Deserialize;

use super::non_empty;
use crate::api::SessionResponse;
use crate::auth::{self, password};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/login - verify credentials and issue a session token.
///
/// Unknown email and wrong password produce the byte-identical 401 so the
/// response can never be used for account enumeration.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (email, password) = match (non_empty(payload.email), non_empty(payload.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::validation_error("Missing fields")),
    };

    let user = state
        .store
        .user_by_email(&email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = auth::issue_token(user.id, user.tenant_id)?;

    tracing::debug!("Login succeeded for user {}", user.id);
    Ok(Json(SessionResponse {
        token,
        user: user.into(),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}
