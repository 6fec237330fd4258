#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use solar_sprint_api::database::memory::MemoryStore;
use solar_sprint_api::database::store::Store;
use solar_sprint_api::{app, AppState};

pub struct TestServer {
    pub base_url: String,
}

/// Boot the real router on an ephemeral port with a fresh in-memory store.
/// Each test gets its own server, so there is no cross-test state.
pub async fn spawn_server() -> Result<TestServer> {
    spawn_with(Arc::new(MemoryStore::default())).await
}

pub async fn spawn_with(store: Arc<dyn Store>) -> Result<TestServer> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let state = AppState::new(store);
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}

/// Sign up a fresh tenant and return (token, user payload).
pub async fn signup(
    client: &reqwest::Client,
    base_url: &str,
    tenant_name: &str,
    email: &str,
    password: &str,
) -> Result<(String, Value)> {
    let res = client
        .post(format!("{}/auth/signup", base_url))
        .json(&json!({
            "tenantName": tenant_name,
            "email": email,
            "password": password,
        }))
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == reqwest::StatusCode::CREATED,
        "signup failed: {}",
        res.status()
    );

    let body = res.json::<Value>().await?;
    let token = body["token"]
        .as_str()
        .context("signup response missing token")?
        .to_string();
    Ok((token, body["user"].clone()))
}

/// Create a project and return its JSON body.
pub async fn create_project(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Value> {
    let mut payload = json!({ "name": name });
    if let Some(description) = description {
        payload["description"] = json!(description);
    }

    let res = client
        .post(format!("{}/projects", base_url))
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == reqwest::StatusCode::CREATED,
        "create project failed: {}",
        res.status()
    );
    Ok(res.json::<Value>().await?)
}
