//! Session token classification.
//!
//! Synthetic ("demo") sessions carry locally minted tokens of the form
//! `demo-token-<userId>-<millis>`; real sessions carry opaque server-issued
//! strings. Everything here is pure string inspection.

use chrono::Utc;

pub const SYNTHETIC_PREFIX: &str = "demo-token-";

/// Default user id when a token encodes no usable identity.
pub const DEFAULT_USER_ID: i64 = 1;

/// True iff the token was minted locally for a demo session.
pub fn is_synthetic(token: &str) -> bool {
    token.starts_with(SYNTHETIC_PREFIX)
}

/// Extract the user id embedded in a synthetic token.
///
/// Malformed or non-synthetic tokens silently fall back to
/// [`DEFAULT_USER_ID`]; callers never see an error from here.
pub fn user_id_from_token(token: &str) -> i64 {
    if is_synthetic(token) {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() >= 3 {
            if let Ok(id) = parts[2].parse::<i64>() {
                return id;
            }
        }
    }
    DEFAULT_USER_ID
}

/// Mint a synthetic session token for a demo login.
pub fn synthetic_token(user_id: i64) -> String {
    format!("{}{}-{}", SYNTHETIC_PREFIX, user_id, Utc::now().timestamp_millis())
}

/// Resolved session identity, built once from the stored token instead of
/// re-parsing the string at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub is_synthetic: bool,
    pub user_id: i64,
    pub raw_token: String,
}

impl SessionContext {
    pub fn from_token(token: &str) -> Self {
        Self {
            is_synthetic: is_synthetic(token),
            user_id: user_id_from_token(token),
            raw_token: token.to_string(),
        }
    }
}
