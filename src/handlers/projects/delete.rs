use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};

use super::find_owned;
use crate::error::ApiError;
use crate::middleware::TenantContext;
use crate::AppState;

/// DELETE /projects/:id - delete after the ownership check. 204 with an
/// empty body; a repeat delete of the same id is 404.
pub async fn project_delete(
    State(state): State<AppState>,
    Extension(context): Extension<TenantContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let project = find_owned(state.store.as_ref(), &context, &id).await?;

    state.store.delete_project(project.id).await?;

    tracing::debug!("Deleted project {} for tenant {}", project.id, context.tenant_id);
    Ok(StatusCode::NO_CONTENT)
}
