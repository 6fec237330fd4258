// Two tiers: public (health + credential endpoints) and tenant-scoped
// (projects, behind the require_tenant guard).
pub mod auth;
pub mod health;
pub mod projects;
