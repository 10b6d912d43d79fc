pub mod advice;
pub mod auth;
pub mod buckets;
pub mod summary;
pub mod transactions;

use crate::error::ApiError;

/// Path segments arrive as strings; non-numeric ids are a client error.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid user ID"))
}
