use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

pub mod password;

/// Session token claims. The subject is the user id; the tenant claim is
/// informational only — authorization always re-reads the user from the
/// store, so a stale or tampered tenant claim cannot widen access.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub tenant: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, tenant_id: Uuid) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.token_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: user_id,
            tenant: tenant_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid token")]
    InvalidToken,
}

/// Sign a session token for a freshly authenticated user.
pub fn issue_token(user_id: Uuid, tenant_id: Uuid) -> Result<String, AuthError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &Claims::new(user_id, tenant_id), &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Validate signature and expiry, returning the claims.
pub fn decode_token(token: &str) -> Result<Claims, AuthError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}
