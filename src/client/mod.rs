//! Request dispatcher: the single entry point all consuming code calls.
//!
//! Each call classifies the stored session token. Synthetic sessions are
//! served from the in-process [`DemoStore`]; everything else goes over the
//! wire to the configured backend with bearer auth attached. Either way the
//! caller sees one result type and one error taxonomy. One attempt per
//! call: no retry, no timeout, no backoff.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config;
use crate::demo::{routes, DemoStore};
use crate::error::ClientError;
use crate::session::SessionContext;
use crate::storage::CredentialStore;
use crate::types::{
    AuthResponse, Bucket, BucketDraft, ChatRequest, ChatResponse, FinancialSummary, LoginRequest,
    Recommendation, RegisterRequest, Transaction, TransactionDraft,
};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
    demo: DemoStore,
}

impl ApiClient {
    /// Client against the configured backend, with the default credential
    /// store and a freshly seeded demo store.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_parts(
            config::config().api.base_url.clone(),
            CredentialStore::open()?,
            DemoStore::seeded(),
        ))
    }

    /// Client with explicit collaborators; tests use this to isolate state.
    pub fn with_parts(base_url: String, credentials: CredentialStore, demo: DemoStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            demo,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Session identity for the stored token, if any.
    pub fn session(&self) -> Option<SessionContext> {
        self.credentials
            .load_token()
            .map(|t| SessionContext::from_token(&t))
    }

    /// Dispatch one request and deserialize the response as `T`.
    ///
    /// The response body is trusted to match the declared shape; no schema
    /// validation happens here.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let token = self.credentials.load_token();

        if let Some(token) = &token {
            let session = SessionContext::from_token(token);
            if session.is_synthetic {
                let value =
                    routes::dispatch(&self.demo, session.user_id, &method, endpoint, body.as_ref())?;
                return Ok(serde_json::from_value(value)?);
            }
        }

        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
            tracing::debug!(status = status.as_u16(), ?message, "request failed");
            return Err(match message {
                Some(message) => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
                None => ClientError::from_status(status.as_u16()),
            });
        }

        Ok(response.json::<T>().await?)
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.request(Method::POST, "/api/auth/login", Some(body)).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let body = serde_json::to_value(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.request(Method::POST, "/api/auth/register", Some(body))
            .await
    }

    // --- financial summary ---

    pub async fn financial_summary(&self, user_id: i64) -> Result<FinancialSummary, ClientError> {
        self.request(
            Method::GET,
            &format!("/api/financial-summary/{}", user_id),
            None,
        )
        .await
    }

    /// Onboarding: submit the initial income/expense figures.
    pub async fn submit_summary(
        &self,
        user_id: i64,
        summary: Value,
    ) -> Result<Value, ClientError> {
        self.request(
            Method::POST,
            &format!("/api/financial-summary/add/{}", user_id),
            Some(summary),
        )
        .await
    }

    // --- buckets ---

    pub async fn buckets(&self, user_id: i64) -> Result<Vec<Bucket>, ClientError> {
        self.request(Method::GET, &format!("/api/buckets/{}", user_id), None)
            .await
    }

    pub async fn create_bucket(
        &self,
        user_id: i64,
        draft: &BucketDraft,
    ) -> Result<Bucket, ClientError> {
        let mut body = serde_json::to_value(draft)?;
        body["userId"] = json!(user_id);
        self.request(Method::POST, "/api/buckets", Some(body)).await
    }

    pub async fn set_bucket_priority(
        &self,
        user_id: i64,
        bucket_id: i64,
        priority: f64,
    ) -> Result<Value, ClientError> {
        self.request(
            Method::PUT,
            &format!("/api/buckets/{}/{}/priority", user_id, bucket_id),
            Some(json!(priority)),
        )
        .await
    }

    pub async fn delete_bucket(&self, user_id: i64, bucket_id: i64) -> Result<Value, ClientError> {
        self.request(
            Method::DELETE,
            &format!("/api/buckets/{}/{}", user_id, bucket_id),
            None,
        )
        .await
    }

    // --- transactions ---

    pub async fn transactions(&self, user_id: i64) -> Result<Vec<Transaction>, ClientError> {
        self.request(Method::GET, &format!("/api/transactions/{}", user_id), None)
            .await
    }

    pub async fn create_transaction(
        &self,
        user_id: i64,
        draft: &TransactionDraft,
    ) -> Result<Transaction, ClientError> {
        let mut body = serde_json::to_value(draft)?;
        body["userId"] = json!(user_id);
        self.request(Method::POST, "/api/transactions", Some(body))
            .await
    }

    // --- advisory ---

    pub async fn recommendations(&self, user_id: i64) -> Result<Vec<Recommendation>, ClientError> {
        self.request(
            Method::GET,
            &format!("/api/ai-analysis/recommendations/{}", user_id),
            None,
        )
        .await
    }

    pub async fn chat(&self, user_id: i64, question: &str) -> Result<ChatResponse, ClientError> {
        let body = serde_json::to_value(ChatRequest {
            question: question.to_string(),
        })?;
        self.request(Method::POST, &format!("/api/ai-chat/{}", user_id), Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::synthetic_token;
    use crate::types::UserProfile;

    fn demo_client(user_id: i64) -> (tempfile::TempDir, ApiClient) {
        let dir = tempfile::tempdir().unwrap();
        let credentials = CredentialStore::at(dir.path().to_path_buf()).unwrap();
        credentials.save_token(&synthetic_token(user_id)).unwrap();
        credentials
            .save_profile(&UserProfile {
                id: user_id,
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
            })
            .unwrap();
        // Unroutable base URL: these tests must never touch the network
        let client = ApiClient::with_parts(
            "http://127.0.0.1:1".to_string(),
            credentials,
            DemoStore::seeded(),
        );
        (dir, client)
    }

    #[tokio::test]
    async fn test_demo_session_lists_seeded_buckets() {
        let (_dir, client) = demo_client(1);
        let buckets = client.buckets(1).await.unwrap();
        assert_eq!(buckets.len(), 3);
        let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Emergency Fund", "Vacation", "New Car"]);
    }

    #[tokio::test]
    async fn test_demo_create_then_list_round_trip() {
        let (_dir, client) = demo_client(1);
        let draft = BucketDraft {
            name: "Vacation II".to_string(),
            target_amount: 3000.0,
            deadline: Some(chrono::Utc::now() + chrono::Duration::days(60)),
            ..Default::default()
        };
        let created = client.create_bucket(1, &draft).await.unwrap();
        assert_eq!(created.current_saved_amount, 0.0);
        assert_eq!(created.priority_score, 0.5);
        assert_eq!(created.status, "In Progress");

        let buckets = client.buckets(1).await.unwrap();
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[3], created);
    }

    #[tokio::test]
    async fn test_demo_priority_update_and_not_found() {
        let (_dir, client) = demo_client(1);
        let ack = client.set_bucket_priority(1, 1, 0.8).await.unwrap();
        assert_eq!(ack["bucket"]["priorityScore"], 0.8);

        let err = client.set_bucket_priority(1, 99, 0.8).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_demo_session_uses_token_identity() {
        // Token for user 2 sees none of user 1's seed records
        let (_dir, client) = demo_client(2);
        assert!(client.buckets(2).await.unwrap().is_empty());
        assert!(client.transactions(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_mutation_outside_known_paths_is_acked() {
        let (_dir, client) = demo_client(1);
        let ack = client
            .submit_summary(1, serde_json::json!({ "savingsBalance": 100.0 }))
            .await
            .unwrap();
        assert_eq!(ack["success"], true);
    }

    #[tokio::test]
    async fn test_real_token_with_unreachable_backend_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let credentials = CredentialStore::at(dir.path().to_path_buf()).unwrap();
        credentials.save_token("opaque-server-token").unwrap();
        let client = ApiClient::with_parts(
            "http://127.0.0.1:1".to_string(),
            credentials,
            DemoStore::seeded(),
        );

        let err = client.buckets(1).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
