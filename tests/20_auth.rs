mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn signup_then_login_binds_the_same_tenant() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let (_token, user) = common::signup(
        &client,
        &server.base_url,
        "Acme",
        "a@x.com",
        "longenough1",
    )
    .await?;
    assert_eq!(user["email"], "a@x.com");
    let tenant_id = user["tenantId"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "a@x.com", "password": "longenough1" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["tenantId"], tenant_id.as_str());
    assert_eq!(body["user"]["email"], "a@x.com");
    // The password hash must never appear in a response
    assert!(body["user"].get("passwordHash").is_none());
    Ok(())
}

#[tokio::test]
async fn signup_rejects_missing_fields() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    for payload in [
        json!({ "email": "a@x.com", "password": "longenough1" }),
        json!({ "tenantName": "Acme", "password": "longenough1" }),
        json!({ "tenantName": "Acme", "email": "a@x.com" }),
        json!({ "tenantName": "", "email": "a@x.com", "password": "longenough1" }),
    ] {
        let res = client
            .post(format!("{}/auth/signup", server.base_url))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);

        let body = res.json::<Value>().await?;
        assert!(body["message"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    common::signup(&client, &server.base_url, "Acme", "a@x.com", "longenough1").await?;

    let wrong_password = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "a@x.com", "password": "wrong-password" }))
        .send()
        .await?;
    let unknown_email = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "nobody@x.com", "password": "longenough1" }))
        .send()
        .await?;

    // Identical status and identical body for both failure modes
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let body_a = wrong_password.json::<Value>().await?;
    let body_b = unknown_email.json::<Value>().await?;
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["message"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn login_rejects_missing_fields() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn tenant_routes_fail_closed_without_identity() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    // No credential at all
    let res = client
        .get(format!("{}/projects", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let res = client
        .get(format!("{}/projects", server.base_url))
        .bearer_auth("not-a-real-token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}
