use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use solar_sprint_api::database::memory::MemoryStore;
use solar_sprint_api::database::postgres::PgStore;
use solar_sprint_api::database::store::Store;
use solar_sprint_api::{app, config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solar_sprint_api=info,tower_http=info".into()),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting solar-sprint-api in {:?} mode", config.environment);

    let store: Arc<dyn Store> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pg = PgStore::connect(&config.database, &url)
                .context("failed to configure database pool")?;
            // The pool is lazy; a down database only degrades /health, so a
            // failed migration run is logged rather than fatal.
            if let Err(e) = pg.migrate().await {
                tracing::warn!("Migrations not applied: {}", e);
            }
            Arc::new(pg)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is not persisted)");
            Arc::new(MemoryStore::default())
        }
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("solar-sprint-api listening on http://{}", bind_addr);

    axum::serve(listener, app(AppState::new(store)))
        .await
        .context("server error")?;

    Ok(())
}
