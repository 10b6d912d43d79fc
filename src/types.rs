//! Wire types shared by the server, the demo layer, and the client.
//!
//! Field names follow the backend's JSON contract (camelCase); the UI layer
//! deserializes these shapes directly, so renames here are breaking changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A savings sub-goal with a target amount and a display-ordering weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_saved_amount: f64,
    /// Relative urgency in [0,1]; clamped by callers, not enforced here.
    pub priority_score: f64,
    pub deadline: DateTime<Utc>,
    pub status: String,
}

/// Signed ledger entry; negative amounts are expenses, positive income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub description: String,
    pub category: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub is_reconciled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

/// Static advisory record; read-only, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub description: String,
    pub potential_impact: Rating,
    pub difficulty: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: i64,
    pub salary: f64,
    pub investments: f64,
    pub business_income: f64,
    pub financial_summary_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expenses {
    pub id: i64,
    pub rent_mortgage: f64,
    pub utilities: f64,
    pub insurance: f64,
    pub loan_payments: f64,
    pub groceries: f64,
    pub transportation: f64,
    pub subscriptions: f64,
    pub entertainment: f64,
    pub financial_summary_id: i64,
}

/// One-to-one with a user; singleton per user in the demo store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub id: i64,
    pub savings_balance: f64,
    pub investment_balance: f64,
    pub debt_balance: f64,
    pub user_id: i64,
    pub income: Income,
    pub expenses: Expenses,
}

/// Profile entry kept in client-local storage alongside the session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
}

/// Creation payload for buckets; optional fields take store defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketDraft {
    pub name: String,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_saved_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Creation payload for transactions; optional fields take store defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reconciled: Option<bool>,
}
