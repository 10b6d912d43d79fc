// Transaction listing and creation. The collection-level GET returns
// everything unfiltered, matching the backend it mocks; per-user listing
// goes through the /:user_id variant.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::types::Transaction;

use super::parse_id;

pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    let backend = state.lock();
    Json(backend.transactions.clone())
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let backend = state.lock();
    let transactions: Vec<Transaction> = backend
        .transactions
        .iter()
        .filter(|t| t.user_id == user_id)
        .cloned()
        .collect();
    Ok(Json(transactions))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Transaction>, ApiError> {
    let user_id = body.get("userId").and_then(Value::as_i64);
    let amount = body.get("amount").and_then(Value::as_f64);
    let description = body.get("description").and_then(Value::as_str);
    let transaction_date = body.get("transactionDate").and_then(Value::as_str);

    let (user_id, amount, description, transaction_date) =
        match (user_id, amount, description, transaction_date) {
            (Some(u), Some(a), Some(d), Some(t)) if !d.is_empty() => (u, a, d, t),
            _ => return Err(ApiError::bad_request("Missing required fields")),
        };

    let transaction_date: DateTime<Utc> = DateTime::parse_from_rfc3339(transaction_date)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| ApiError::bad_request("Invalid transaction date"))?;

    let mut backend = state.lock();
    let transaction = Transaction {
        id: backend.next_transaction_id,
        user_id,
        amount,
        description: description.to_string(),
        category: body
            .get("category")
            .and_then(Value::as_str)
            .map(str::to_string),
        transaction_date,
        reference: body
            .get("reference")
            .and_then(Value::as_str)
            .map(str::to_string),
        notes: body.get("notes").and_then(Value::as_str).map(str::to_string),
        is_reconciled: body
            .get("isReconciled")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    };
    backend.next_transaction_id += 1;
    backend.transactions.push(transaction.clone());

    tracing::debug!(transaction_id = transaction.id, user_id, "transaction created");
    Ok(Json(transaction))
}
