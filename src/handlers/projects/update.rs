use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Deserializer};

use super::find_owned;
use crate::database::models::{Project, ProjectPatch};
use crate::error::ApiError;
use crate::middleware::TenantContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    /// Three-state field: absent = no change, null = clear, value = set.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

// Wraps the deserialized value in Some so an explicit `null` (Some(None))
// stays distinguishable from an absent field (None via serde(default)).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// PATCH /projects/:id - partial merge after the ownership check. Only the
/// provided fields change; at least one must be present.
pub async fn project_update(
    State(state): State<AppState>,
    Extension(context): Extension<TenantContext>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    if payload.name.is_none() && payload.description.is_none() {
        return Err(ApiError::validation_error("No fields provided"));
    }

    let name = match payload.name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ApiError::validation_error("Name cannot be empty"));
            }
            Some(name)
        }
        None => None,
    };

    let project = find_owned(state.store.as_ref(), &context, &id).await?;

    let updated = state
        .store
        .update_project(
            project.id,
            ProjectPatch {
                name,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(updated))
}
