use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth;
use crate::database::models::AuthUser;
use crate::database::store::Store;
use crate::error::ApiError;
use crate::AppState;

/// Resolved {user, tenant} pair attached to every authorized request.
#[derive(Clone, Debug)]
pub struct TenantContext {
    pub user_id: Uuid,
    pub tenant_id: Uuid,
}

/// Identity resolver: bearer token -> validated claims -> live user record.
///
/// Identity is re-derived from the store on every call, so a deleted user
/// fails closed even while holding a token that still verifies. Store lookup
/// errors are logged and swallowed to "no identity"; they never surface as a
/// 500 from the auth path.
pub async fn resolve_identity(store: &dyn Store, headers: &HeaderMap) -> Option<AuthUser> {
    let token = bearer_token(headers)?;
    let claims = auth::decode_token(token).ok()?;

    match store.auth_user(claims.sub).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Identity lookup failed: {}", e);
            None
        }
    }
}

/// Tenant authorization guard. The single choke point in front of every
/// tenant-scoped route: no identity, or an identity without a tenant
/// association, short-circuits with 401 before the handler runs. Otherwise a
/// `TenantContext` is injected as a request extension.
pub async fn require_tenant(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_identity(state.store.as_ref(), request.headers())
        .await
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    // Same message as the missing-identity case: the response must not
    // reveal whether the token named a real user.
    let tenant_id = user
        .tenant_id
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    request.extensions_mut().insert(TenantContext {
        user_id: user.id,
        tenant_id,
    });

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
