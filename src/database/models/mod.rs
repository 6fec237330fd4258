pub mod project;
pub mod tenant;
pub mod user;

pub use project::{Project, ProjectPatch};
pub use tenant::Tenant;
pub use user::{AuthUser, User};
