mod common;

use anyhow::Result;
use serde_json::{json, Value};

#[tokio::test]
async fn login_with_seed_account_issues_opaque_token() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "john@example.com", "password": "password" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "john@example.com");
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    // Server tokens must not look like locally minted demo sessions
    assert!(!token.starts_with("demo-token-"));
    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "john@example.com", "password": "nope" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Invalid email or password");

    let resp = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "john@example.com" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test]
async fn register_then_login_round_trip() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({
            "name": "New User",
            "email": "new@example.com",
            "password": "hunter22"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "New User");

    // Duplicate email conflicts
    let resp = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({
            "name": "Someone Else",
            "email": "new@example.com",
            "password": "other"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 409);

    // The registered password works for login
    let resp = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "new@example.com", "password": "hunter22" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    Ok(())
}
