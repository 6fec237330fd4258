use axum::{extract::State, response::Json, Extension};

use crate::database::models::Project;
use crate::error::ApiError;
use crate::middleware::TenantContext;
use crate::AppState;

/// GET /projects - all projects of the caller's tenant, newest first.
pub async fn project_list(
    State(state): State<AppState>,
    Extension(context): Extension<TenantContext>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store.projects_for_tenant(context.tenant_id).await?;
    Ok(Json(projects))
}
