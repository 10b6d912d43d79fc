// Canned analysis endpoints: a static recommendation list and a
// keyword-matched chat answer. No model anywhere.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::advisor;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::types::{ChatResponse, Recommendation};

use super::parse_id;

pub async fn recommendations(
    State(_state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    parse_id(&user_id)?;
    Ok(Json(advisor::recommendations()))
}

pub async fn chat(
    State(_state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponse>, ApiError> {
    parse_id(&user_id)?;
    let question = body
        .get("question")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Question is required"))?;

    Ok(Json(ChatResponse {
        response: advisor::advice_for(question),
    }))
}
