//! Mock response generation for demo sessions.
//!
//! Endpoints are resolved once into an enumerated [`Route`] and dispatched
//! with an exhaustive match, so every fabricated response shape is
//! statically accounted for. Payloads must match the real backend
//! field-for-field; the UI cannot tell which side answered.

use reqwest::Method;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::types::{BucketDraft, TransactionDraft};

use super::DemoStore;

/// The set of endpoint shapes the demo layer recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    FinancialSummary,
    ListTransactions,
    CreateTransaction,
    ListBuckets,
    GetBucket { bucket_id: i64 },
    CreateBucket,
    UpdatePriority { bucket_id: i64 },
    DeleteBucket { bucket_id: i64 },
    Recommendations,
    Unmatched,
}

impl Route {
    /// Resolve an endpoint path and method into a route. User ids embedded
    /// in paths are ignored here; the session token is the identity source.
    pub fn resolve(method: &Method, endpoint: &str) -> Route {
        let path = endpoint.split('?').next().unwrap_or(endpoint);
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.first() == Some(&"api") {
            segments.remove(0);
        }

        match segments.as_slice() {
            ["financial-summary", "add", ..] => Route::Unmatched,
            ["financial-summary", ..] if method == Method::GET => Route::FinancialSummary,
            ["transactions"] | ["transactions", _] if method == Method::GET => {
                Route::ListTransactions
            }
            ["transactions"] if method == Method::POST => Route::CreateTransaction,
            ["buckets"] if method == Method::POST => Route::CreateBucket,
            ["buckets", _] if method == Method::GET => Route::ListBuckets,
            ["buckets", _, id] if method == Method::GET => match id.parse() {
                Ok(bucket_id) => Route::GetBucket { bucket_id },
                Err(_) => Route::ListBuckets,
            },
            ["buckets", _, id] if method == Method::DELETE => match id.parse() {
                Ok(bucket_id) => Route::DeleteBucket { bucket_id },
                Err(_) => Route::Unmatched,
            },
            ["buckets", _, id, "priority"] if method == Method::PUT => match id.parse() {
                Ok(bucket_id) => Route::UpdatePriority { bucket_id },
                Err(_) => Route::Unmatched,
            },
            ["ai-analysis", "recommendations", ..] if method == Method::GET => {
                Route::Recommendations
            }
            _ => Route::Unmatched,
        }
    }
}

/// Serve one request from the demo store, shaping the payload the way the
/// real backend would.
pub fn dispatch(
    store: &DemoStore,
    user_id: i64,
    method: &Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Value, ClientError> {
    let route = Route::resolve(method, endpoint);
    tracing::debug!(?route, %endpoint, user_id, "serving from demo store");

    match route {
        Route::FinancialSummary => Ok(json!(store.summary_for(user_id))),
        Route::ListTransactions => Ok(json!(store.list_transactions(user_id))),
        Route::CreateTransaction => {
            let draft = transaction_draft(body);
            Ok(json!(store.create_transaction(user_id, draft)))
        }
        Route::ListBuckets => Ok(json!(store.list_buckets(user_id))),
        Route::GetBucket { bucket_id } => store
            .get_bucket(bucket_id, user_id)
            .map(|b| json!(b))
            .ok_or_else(|| ClientError::NotFound(format!("Bucket {}", bucket_id))),
        Route::CreateBucket => {
            let draft = bucket_draft(body);
            Ok(json!(store.create_bucket(user_id, draft)))
        }
        Route::UpdatePriority { bucket_id } => {
            // Body is the bare new priority value
            let priority = coerce_number(body).unwrap_or(0.5);
            store
                .update_priority(bucket_id, user_id, priority)
                .map(|bucket| json!({ "success": true, "bucket": bucket }))
                .ok_or_else(|| ClientError::NotFound(format!("Bucket {}", bucket_id)))
        }
        Route::DeleteBucket { bucket_id } => {
            if store.delete_bucket(bucket_id, user_id) {
                Ok(json!({ "success": true }))
            } else {
                Err(ClientError::NotFound(format!("Bucket {}", bucket_id)))
            }
        }
        Route::Recommendations => Ok(json!(crate::advisor::recommendations())),
        // Unknown reads get an empty object; unknown mutations are
        // acknowledged without side effects.
        Route::Unmatched => {
            if method == Method::GET {
                Ok(json!({}))
            } else {
                Ok(json!({ "success": true }))
            }
        }
    }
}

/// Coerce a JSON value into a number, accepting form-input strings.
/// Unparseable values are `None` so callers fall back to their defaults.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn field<'a>(body: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    body?.get(key)
}

fn string_field(body: Option<&Value>, key: &str) -> Option<String> {
    field(body, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn date_field(body: Option<&Value>, key: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    field(body, key)
        .and_then(Value::as_str)
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&chrono::Utc))
}

fn bucket_draft(body: Option<&Value>) -> BucketDraft {
    BucketDraft {
        name: string_field(body, "name").unwrap_or_default(),
        target_amount: coerce_number(field(body, "targetAmount")).unwrap_or(0.0),
        current_saved_amount: coerce_number(field(body, "currentSavedAmount")),
        priority_score: coerce_number(field(body, "priorityScore")),
        deadline: date_field(body, "deadline"),
        status: string_field(body, "status"),
    }
}

fn transaction_draft(body: Option<&Value>) -> TransactionDraft {
    TransactionDraft {
        amount: coerce_number(field(body, "amount")).unwrap_or(0.0),
        description: string_field(body, "description"),
        category: string_field(body, "category"),
        transaction_date: date_field(body, "transactionDate"),
        reference: string_field(body, "reference"),
        notes: string_field(body, "notes"),
        is_reconciled: field(body, "isReconciled").and_then(Value::as_bool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_resolution() {
        assert_eq!(
            Route::resolve(&Method::GET, "/api/financial-summary/1"),
            Route::FinancialSummary
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/api/transactions"),
            Route::ListTransactions
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/api/transactions/1"),
            Route::ListTransactions
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/api/transactions"),
            Route::CreateTransaction
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/api/buckets/1"),
            Route::ListBuckets
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/api/buckets/1/3"),
            Route::GetBucket { bucket_id: 3 }
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/api/buckets"),
            Route::CreateBucket
        );
        assert_eq!(
            Route::resolve(&Method::PUT, "/api/buckets/1/2/priority"),
            Route::UpdatePriority { bucket_id: 2 }
        );
        assert_eq!(
            Route::resolve(&Method::DELETE, "/api/buckets/1/2"),
            Route::DeleteBucket { bucket_id: 2 }
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/api/ai-analysis/recommendations/1"),
            Route::Recommendations
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/api/ai-chat/1"),
            Route::Unmatched
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/api/financial-summary/add/1"),
            Route::Unmatched
        );
    }

    #[test]
    fn test_string_numbers_are_coerced() {
        let store = DemoStore::seeded();
        let body = serde_json::json!({
            "name": "Laptop",
            "targetAmount": "1500.50",
            "priorityScore": "0.25",
        });
        let created =
            dispatch(&store, 1, &Method::POST, "/api/buckets", Some(&body)).unwrap();
        assert_eq!(created["targetAmount"], 1500.50);
        assert_eq!(created["priorityScore"], 0.25);
        assert_eq!(created["currentSavedAmount"], 0.0);
    }

    #[test]
    fn test_unparseable_numbers_default_to_zero() {
        let store = DemoStore::seeded();
        let body = serde_json::json!({ "name": "Broken", "targetAmount": "lots" });
        let created =
            dispatch(&store, 1, &Method::POST, "/api/buckets", Some(&body)).unwrap();
        assert_eq!(created["targetAmount"], 0.0);
        // priority was absent entirely, so the store default applies
        assert_eq!(created["priorityScore"], 0.5);
    }

    #[test]
    fn test_get_missing_bucket_is_typed_not_found() {
        let store = DemoStore::seeded();
        let result = dispatch(&store, 1, &Method::GET, "/api/buckets/1/99", None);
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[test]
    fn test_priority_update_echoes_bucket() {
        let store = DemoStore::seeded();
        let body = serde_json::json!(0.8);
        let result = dispatch(
            &store,
            1,
            &Method::PUT,
            "/api/buckets/1/1/priority",
            Some(&body),
        )
        .unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["bucket"]["priorityScore"], 0.8);
    }

    #[test]
    fn test_unmatched_read_is_empty_object() {
        let store = DemoStore::seeded();
        let result = dispatch(&store, 1, &Method::GET, "/api/unknown", None).unwrap();
        assert_eq!(result, serde_json::json!({}));
    }

    #[test]
    fn test_unmatched_mutation_is_acknowledged() {
        let store = DemoStore::seeded();
        let body = serde_json::json!({ "question": "how do I save?" });
        let result =
            dispatch(&store, 1, &Method::POST, "/api/ai-chat/1", Some(&body)).unwrap();
        assert_eq!(result, serde_json::json!({ "success": true }));
    }
}
