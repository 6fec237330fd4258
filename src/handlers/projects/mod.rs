// Tenant-scoped project CRUD. Every handler here runs behind the
// `require_tenant` guard and receives a `TenantContext` extension.
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::project_create;
pub use delete::project_delete;
pub use get::project_get;
pub use list::project_list;
pub use update::project_update;

use uuid::Uuid;

use crate::database::models::Project;
use crate::database::store::Store;
use crate::error::ApiError;
use crate::middleware::TenantContext;

/// Shared ownership check for get/update/delete.
///
/// Unknown id (including a path segment that is not a UUID) is 404; a real
/// project owned by another tenant is 403, never 404. That 403/404
/// distinction is deliberate and load-bearing: existence is only ever
/// revealed through the status code, not through payloads or filtering.
pub(crate) async fn find_owned(
    store: &dyn Store,
    context: &TenantContext,
    id: &str,
) -> Result<Project, ApiError> {
    let id = Uuid::parse_str(id).map_err(|_| ApiError::not_found("Project not found"))?;

    let project = store
        .project_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    if project.tenant_id != context.tenant_id {
        return Err(ApiError::forbidden("Forbidden"));
    }

    Ok(project)
}
