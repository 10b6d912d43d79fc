// Bucket CRUD: list per user, create, show, delete, and priority updates.
// The priority PUT body is the bare new score, not an object.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::types::Bucket;

use super::parse_id;

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Bucket>>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let backend = state.lock();
    let buckets: Vec<Bucket> = backend
        .buckets
        .iter()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect();
    Ok(Json(buckets))
}

pub async fn show(
    State(state): State<AppState>,
    Path((user_id, bucket_id)): Path<(String, String)>,
) -> Result<Json<Bucket>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let bucket_id = parse_id(&bucket_id)?;
    let backend = state.lock();
    backend
        .buckets
        .iter()
        .find(|b| b.id == bucket_id && b.user_id == user_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Bucket not found"))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Bucket>, ApiError> {
    let user_id = body.get("userId").and_then(Value::as_i64);
    let name = body.get("name").and_then(Value::as_str);
    let target_amount = body.get("targetAmount").and_then(Value::as_f64);
    let deadline = body.get("deadline").and_then(Value::as_str);

    let (user_id, name, target_amount, deadline) = match (user_id, name, target_amount, deadline) {
        (Some(u), Some(n), Some(t), Some(d)) if !n.is_empty() => (u, n, t, d),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    let deadline: DateTime<Utc> = DateTime::parse_from_rfc3339(deadline)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| ApiError::bad_request("Invalid deadline"))?;

    let mut backend = state.lock();
    let bucket = Bucket {
        id: backend.next_bucket_id,
        user_id,
        name: name.to_string(),
        target_amount,
        current_saved_amount: body
            .get("currentSavedAmount")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        priority_score: body
            .get("priorityScore")
            .and_then(Value::as_f64)
            .unwrap_or(0.5),
        deadline,
        status: body
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("In Progress")
            .to_string(),
    };
    backend.next_bucket_id += 1;
    backend.buckets.push(bucket.clone());

    tracing::debug!(bucket_id = bucket.id, user_id, "bucket created");
    Ok(Json(bucket))
}

pub async fn set_priority(
    State(state): State<AppState>,
    Path((user_id, bucket_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let bucket_id = parse_id(&bucket_id)?;
    let priority = body
        .as_f64()
        .ok_or_else(|| ApiError::bad_request("Invalid priority value"))?;

    let mut backend = state.lock();
    let bucket = backend
        .buckets
        .iter_mut()
        .find(|b| b.id == bucket_id && b.user_id == user_id)
        .ok_or_else(|| ApiError::not_found("Bucket not found"))?;

    bucket.priority_score = priority;
    Ok(Json(json!({ "success": true, "bucket": bucket.clone() })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, bucket_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_id(&user_id)?;
    let bucket_id = parse_id(&bucket_id)?;

    let mut backend = state.lock();
    let index = backend
        .buckets
        .iter()
        .position(|b| b.id == bucket_id && b.user_id == user_id)
        .ok_or_else(|| ApiError::not_found("Bucket not found"))?;

    backend.buckets.remove(index);
    Ok(Json(json!({ "success": true })))
}
