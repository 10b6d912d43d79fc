// HTTP API error types for the mock backend, plus the client-side error
// taxonomy the dispatcher normalizes everything into.
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

/// Server-side error with an HTTP status and a client-facing message.
/// Response bodies are `{"message": ...}` to match the backend contract.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

/// Everything a dispatcher call can fail with, regardless of whether the
/// call was served by the demo layer or the real network. Callers surface
/// the message at the UI boundary; nothing here is retried.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure: no response at all.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with the server's (or synthesized) message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Resource absent for the given id/user combination.
    #[error("{0} not found")]
    NotFound(String),

    /// Request was malformed before it ever left the client.
    #[error("{0}")]
    Validation(String),

    /// Missing or unusable local session state.
    #[error("{0}")]
    Session(String),

    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Message for a non-success status whose body carried no usable
    /// `message` field.
    pub fn from_status(status: u16) -> Self {
        ClientError::Api {
            status,
            message: format!("API error: {}", status),
        }
    }
}
