pub mod auth;

pub use auth::{require_tenant, resolve_identity, TenantContext};
