use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;

use crate::database::models::Project;
use crate::error::ApiError;
use crate::middleware::TenantContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /projects - create a project stamped with the caller's tenant.
pub async fn project_create(
    State(state): State<AppState>,
    Extension(context): Extension<TenantContext>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::validation_error("Name is required"))?;

    let project = state
        .store
        .create_project(context.tenant_id, name, payload.description.as_deref())
        .await?;

    tracing::debug!("Created project {} for tenant {}", project.id, context.tenant_id);
    Ok((StatusCode::CREATED, Json(project)))
}
