use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::database::models::{AuthUser, Project, ProjectPatch, Tenant, User};
use crate::database::store::{Store, StoreError};

/// Postgres-backed store. The pool is built lazily so the binary can start
/// (and report `db: "error"` from /health) while the database is down.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn connect(config: &DatabaseConfig, url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_lazy(url)?;

        info!("Created database pool (max_connections={})", config.max_connections);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply embedded migrations. Safe to retry; sqlx tracks applied versions.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_tenant(&self, name: &str) -> Result<Tenant, StoreError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (id, name, created_at) VALUES ($1, $2, $3) \
             RETURNING id, name, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(tenant)
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        tenant_id: Uuid,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, tenant_id, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, email, password_hash, tenant_id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(tenant_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, tenant_id, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn auth_user(&self, id: Uuid) -> Result<Option<AuthUser>, StoreError> {
        let user = sqlx::query_as::<_, AuthUser>(
            "SELECT id, email, tenant_id FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn projects_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, tenant_id, created_at, updated_at \
             FROM projects WHERE tenant_id = $1 ORDER BY created_at DESC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(
        &self,
        tenant_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError> {
        let now = Utc::now();
        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (id, name, description, tenant_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING id, name, description, tenant_id, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(tenant_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, tenant_id, created_at, updated_at \
             FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, StoreError> {
        // $3/$4 encode the three-state description: only overwrite when the
        // field was present in the patch, even if the new value is NULL.
        let set_description = patch.description.is_some();
        let description = patch.description.flatten();

        let project = sqlx::query_as::<_, Project>(
            "UPDATE projects SET \
                 name = COALESCE($2, name), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 updated_at = $5 \
             WHERE id = $1 \
             RETURNING id, name, description, tenant_id, created_at, updated_at",
        )
        .bind(id)
        .bind(patch.name)
        .bind(set_description)
        .bind(description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        project.ok_or_else(|| StoreError::NotFound("Project not found".to_string()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }
}
