// Fixed response schemas shared across handlers. Every success body is one
// of these (or `Project` / `Vec<Project>` serialized directly); the error
// body is produced by `ApiError::to_json`.
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::database::models::User;

/// Client-safe user view: never includes the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub tenant_id: Uuid,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            tenant_id: user.tenant_id,
        }
    }
}

/// Returned by signup and login: a signed session token plus the user it
/// identifies.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub db: &'static str,
}
