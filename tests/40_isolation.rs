mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

// The core invariant: a TenantContext for one tenant can never read, change
// or delete another tenant's project. Such attempts are 403 - not 404, and
// never a silent success.

#[tokio::test]
async fn cross_tenant_access_is_forbidden_not_hidden() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let (owner_token, _) =
        common::signup(&client, &server.base_url, "Acme", "owner@acme.com", "longenough1").await?;
    let (intruder_token, _) =
        common::signup(&client, &server.base_url, "Rival", "intruder@rival.com", "longenough1")
            .await?;

    let project =
        common::create_project(&client, &server.base_url, &owner_token, "secret-plan", None)
            .await?;
    let id = project["id"].as_str().unwrap();

    // Read
    let res = client
        .get(format!("{}/projects/{}", server.base_url, id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "FORBIDDEN");
    // No project fields may leak through the error payload
    assert!(body.get("name").is_none());

    // Update
    let res = client
        .patch(format!("{}/projects/{}", server.base_url, id))
        .bearer_auth(&intruder_token)
        .json(&json!({ "name": "hijacked" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Delete
    let res = client
        .delete(format!("{}/projects/{}", server.base_url, id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The owner still sees the project, untouched
    let res = client
        .get(format!("{}/projects/{}", server.base_url, id))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "secret-plan");
    Ok(())
}

#[tokio::test]
async fn listing_never_crosses_tenants() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let (t1_token, _) =
        common::signup(&client, &server.base_url, "One", "one@x.com", "longenough1").await?;
    let (t2_token, _) =
        common::signup(&client, &server.base_url, "Two", "two@x.com", "longenough1").await?;

    common::create_project(&client, &server.base_url, &t1_token, "alpha", None).await?;
    common::create_project(&client, &server.base_url, &t1_token, "beta", None).await?;

    let res = client
        .get(format!("{}/projects", server.base_url))
        .bearer_auth(&t2_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let projects = res.json::<Vec<Value>>().await?;
    assert!(projects.is_empty());

    let res = client
        .get(format!("{}/projects", server.base_url))
        .bearer_auth(&t1_token)
        .send()
        .await?;
    let projects = res.json::<Vec<Value>>().await?;
    assert_eq!(projects.len(), 2);
    Ok(())
}
