use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user row. Deliberately not Serialize: the password hash must never
/// reach a response body. API responses use `api::UserSummary` instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub tenant_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Projection resolved per-request by the identity resolver.
///
/// `tenant_id` stays optional here even though the column is NOT NULL: the
/// tenant guard fails closed on a missing association rather than trusting
/// the schema.
#[derive(Debug, Clone, FromRow)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub tenant_id: Option<Uuid>,
}
