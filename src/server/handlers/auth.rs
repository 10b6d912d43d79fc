// POST /api/auth/login and /api/auth/register
//
// Accounts live in the in-memory user table; tokens are opaque one-off
// strings with no claims and no expiry. Nothing here validates tokens
// later; the data routes are open by design.

use axum::{extract::State, response::Json};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::{password_digest, AppState, UserRecord};
use crate::types::AuthResponse;

fn issue_token() -> String {
    format!("fb-{}", Uuid::new_v4())
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let backend = state.lock();
    let user = backend
        .users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    if !user.verify_password(password) {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    tracing::info!(user_id = user.id, "login");
    Ok(Json(AuthResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        token: issue_token(),
    }))
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let mut backend = state.lock();
    if backend
        .users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(email))
    {
        return Err(ApiError::conflict("User with this email already exists"));
    }

    let salt = Uuid::new_v4().simple().to_string();
    let user = UserRecord {
        id: backend.next_user_id,
        name: name.to_string(),
        email: email.to_string(),
        password_digest: password_digest(&salt, password),
        password_salt: salt,
    };
    backend.next_user_id += 1;

    let response = AuthResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        token: issue_token(),
    };
    backend.users.push(user);

    tracing::info!(user_id = response.id, "registered");
    Ok(Json(response))
}
