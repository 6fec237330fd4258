mod common;

use anyhow::Result;
use reqwest::StatusCode;
use std::sync::Arc;

use solar_sprint_api::config::DatabaseConfig;
use solar_sprint_api::database::postgres::PgStore;

#[tokio::test]
async fn health_reports_db_ok() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["service"], "solar-sprint-api");
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn dead_database_degrades_payload_not_status() -> Result<()> {
    // Lazy pool pointed at a port nothing listens on: the ping fails at
    // request time, but /health must still answer 200.
    let config = DatabaseConfig {
        max_connections: 1,
        connect_timeout_secs: 1,
    };
    let store = PgStore::connect(&config, "postgres://nobody@127.0.0.1:1/nothing")?;
    let server = common::spawn_with(Arc::new(store)).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    Ok(())
}
