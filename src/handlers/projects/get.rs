use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};

use super::find_owned;
use crate::database::models::Project;
use crate::error::ApiError;
use crate::middleware::TenantContext;
use crate::AppState;

/// GET /projects/:id - fetch one project after the ownership check.
pub async fn project_get(
    State(state): State<AppState>,
    Extension(context): Extension<TenantContext>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = find_owned(state.store.as_ref(), &context, &id).await?;
    Ok(Json(project))
}
