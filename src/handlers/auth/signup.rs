use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use super::non_empty;
use crate::api::SessionResponse;
use crate::auth::{self, password};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub tenant_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/signup - create a tenant and its first user.
///
/// Two independent store calls, no transaction (single-call atomicity is the
/// store's concern, and this system layers no multi-step transactions on
/// top). A duplicate email surfaces from the store's unique constraint as a
/// generic 500.
pub async fn signup_post(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let (tenant_name, email, plain) = match (
        non_empty(payload.tenant_name),
        non_empty(payload.email),
        non_empty(payload.password),
    ) {
        (Some(t), Some(e), Some(p)) => (t, e, p),
        _ => return Err(ApiError::validation_error("Missing required fields")),
    };

    let password_hash = password::hash_password(&plain)?;

    let tenant = state.store.create_tenant(&tenant_name).await?;
    let user = state
        .store
        .create_user(&email, &password_hash, tenant.id)
        .await?;

    let token = auth::issue_token(user.id, user.tenant_id)?;

    tracing::info!("Created tenant {} with first user {}", tenant.id, user.id);
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            user: user.into(),
        }),
    ))
}
