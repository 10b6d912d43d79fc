mod common;

use anyhow::Result;
use serde_json::{json, Value};

#[tokio::test]
async fn summary_lookup_and_not_found() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/financial-summary/1", server.base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let summary: Value = resp.json().await?;
    assert_eq!(summary["savingsBalance"], 5000.0);
    assert_eq!(summary["income"]["salary"], 5000.0);
    assert_eq!(summary["expenses"]["rentMortgage"], 1200.0);

    let resp = client
        .get(format!("{}/api/financial-summary/99", server.base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Financial summary not found");

    let resp = client
        .get(format!("{}/api/financial-summary/abc", server.base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test]
async fn onboarding_summary_upsert() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "id": 0,
        "savingsBalance": 750.0,
        "investmentBalance": 0.0,
        "debtBalance": 1200.0,
        "userId": 2,
        "income": {
            "id": 0, "salary": 3200.0, "investments": 0.0,
            "businessIncome": 0.0, "financialSummaryId": 0
        },
        "expenses": {
            "id": 0, "rentMortgage": 900.0, "utilities": 120.0,
            "insurance": 80.0, "loanPayments": 100.0, "groceries": 300.0,
            "transportation": 90.0, "subscriptions": 25.0,
            "entertainment": 60.0, "financialSummaryId": 0
        }
    });

    let resp = client
        .post(format!("{}/api/financial-summary/add/2", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let stored: Value = resp.json().await?;
    assert_eq!(stored["id"], 2);
    assert_eq!(stored["userId"], 2);
    assert_eq!(stored["income"]["financialSummaryId"], 2);

    // Second submission replaces in place, keeping the assigned id
    let mut updated = payload.clone();
    updated["savingsBalance"] = json!(900.0);
    let resp = client
        .post(format!("{}/api/financial-summary/add/2", server.base_url))
        .json(&updated)
        .send()
        .await?;
    let stored: Value = resp.json().await?;
    assert_eq!(stored["id"], 2);
    assert_eq!(stored["savingsBalance"], 900.0);

    let resp = client
        .get(format!("{}/api/financial-summary/2", server.base_url))
        .send()
        .await?;
    let fetched: Value = resp.json().await?;
    assert_eq!(fetched["savingsBalance"], 900.0);
    Ok(())
}

#[tokio::test]
async fn recommendations_are_static() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!(
            "{}/api/ai-analysis/recommendations/1",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let recs: Vec<Value> = resp.json().await?;
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0]["title"], "Increase Emergency Fund");
    assert_eq!(recs[0]["potentialImpact"], "High");
    assert_eq!(recs[1]["difficulty"], "Low");
    Ok(())
}

#[tokio::test]
async fn chat_matches_keywords_and_validates() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/ai-chat/1", server.base_url))
        .json(&json!({ "question": "How can I save more each month?" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert!(body["response"].as_str().unwrap().contains("$250 per month"));

    let resp = client
        .post(format!("{}/api/ai-chat/1", server.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Question is required");

    let resp = client
        .post(format!("{}/api/ai-chat/abc", server.base_url))
        .json(&json!({ "question": "hi" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Invalid user ID");
    Ok(())
}

#[tokio::test]
async fn health_endpoint() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
