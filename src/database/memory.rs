use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{AuthUser, Project, ProjectPatch, Tenant, User};
use crate::database::store::{Store, StoreError};

/// In-memory store backing tests and database-less development. Mirrors the
/// Postgres semantics that matter to callers: unique emails, newest-first
/// project listing, NotFound on update/delete of a missing row.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tenants: HashMap<Uuid, Tenant>,
    users: HashMap<Uuid, User>,
    projects: HashMap<Uuid, Project>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_tenant(&self, name: &str) -> Result<Tenant, StoreError> {
        let tenant = Tenant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        tenant_id: Uuid,
    ) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == email) {
            // Same caller-visible outcome as the Postgres unique constraint
            return Err(StoreError::Query(format!("duplicate email: {}", email)));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            tenant_id,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn auth_user(&self, id: Uuid) -> Result<Option<AuthUser>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).map(|u| AuthUser {
            id: u.id,
            email: u.email.clone(),
            tenant_id: Some(u.tenant_id),
        }))
    }

    async fn projects_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.read().await;
        let mut projects: Vec<Project> = inner
            .projects
            .values()
            .filter(|p| p.tenant_id == tenant_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn create_project(
        &self,
        tenant_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(str::to_string),
            tenant_id,
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.inner.write().await;
        inner.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.projects.get(&id).cloned())
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        let project = inner
            .projects
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound("Project not found".to_string()))?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .projects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound("Project not found".to_string()))
    }
}
