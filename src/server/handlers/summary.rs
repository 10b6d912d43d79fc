// Financial summary: one record per user. The onboarding flow posts the
// whole shape with zeroed ids and the server assigns them; repeat posts
// replace the existing record in place.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::types::FinancialSummary;

use super::parse_id;

pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let backend = state.lock();
    backend
        .summaries
        .iter()
        .find(|s| s.user_id == user_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Financial summary not found"))
}

pub async fn add(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let mut summary: FinancialSummary = serde_json::from_value(body)
        .map_err(|_| ApiError::bad_request("Missing required fields"))?;
    summary.user_id = user_id;

    let mut backend = state.lock();
    match backend.summaries.iter_mut().find(|s| s.user_id == user_id) {
        Some(existing) => {
            summary.id = existing.id;
            summary.income.id = existing.income.id;
            summary.income.financial_summary_id = existing.id;
            summary.expenses.id = existing.expenses.id;
            summary.expenses.financial_summary_id = existing.id;
            *existing = summary.clone();
        }
        None => {
            let id = backend.next_summary_id;
            backend.next_summary_id += 1;
            summary.id = id;
            summary.income.id = id;
            summary.income.financial_summary_id = id;
            summary.expenses.id = id;
            summary.expenses.financial_summary_id = id;
            backend.summaries.push(summary.clone());
        }
    }

    tracing::debug!(user_id, "financial summary stored");
    Ok(Json(summary))
}
