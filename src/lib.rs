use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use crate::database::store::Store;
use crate::handlers::{auth as auth_handlers, health, projects};
use crate::middleware::require_tenant;

/// Shared application state: one store handle, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Build the full router. Tenant-scoped routes sit behind the
/// `require_tenant` guard; health and the credential endpoints are public.
pub fn app(state: AppState) -> Router {
    let tenant_scoped = Router::new()
        .route(
            "/projects",
            get(projects::project_list).post(projects::project_create),
        )
        .route(
            "/projects/:id",
            get(projects::project_get)
                .patch(projects::project_update)
                .delete(projects::project_delete),
        )
        .route_layer(from_fn_with_state(state.clone(), require_tenant));

    let mut router = Router::new()
        .route("/health", get(health::health_get))
        .route("/auth/signup", post(auth_handlers::signup_post))
        .route("/auth/login", post(auth_handlers::login_post))
        .merge(tenant_scoped)
        .with_state(state);

    if config::config().security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
