use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{AuthUser, Project, ProjectPatch, Tenant, User};

/// Errors from a Store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for tenants, users and projects.
///
/// Every operation is a single atomic call against the backing store; there
/// is no in-process locking or multi-step transaction layered on top. The
/// production backend is Postgres (`PgStore`); `MemoryStore` backs tests and
/// database-less development.
#[async_trait]
pub trait Store: Send + Sync {
    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn create_tenant(&self, name: &str) -> Result<Tenant, StoreError>;

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        tenant_id: Uuid,
    ) -> Result<User, StoreError>;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Lookup used by the identity resolver on every request.
    async fn auth_user(&self, id: Uuid) -> Result<Option<AuthUser>, StoreError>;

    /// All projects of one tenant, newest first.
    async fn projects_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<Project>, StoreError>;

    async fn create_project(
        &self,
        tenant_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError>;

    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError>;

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, StoreError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError>;
}
