//! The mock REST backend: every endpoint the dashboard consumes, backed by
//! in-memory collections seeded at startup. No durable storage, no real
//! authentication, no real analysis.

pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(bucket_routes())
        .merge(transaction_routes())
        .merge(summary_routes())
        .merge(advice_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
}

fn bucket_routes() -> Router<AppState> {
    use axum::routing::{post, put};
    use handlers::buckets;

    Router::new()
        .route("/api/buckets", post(buckets::create))
        .route("/api/buckets/:user_id", get(buckets::list))
        .route(
            "/api/buckets/:user_id/:bucket_id",
            get(buckets::show).delete(buckets::remove),
        )
        .route(
            "/api/buckets/:user_id/:bucket_id/priority",
            put(buckets::set_priority),
        )
}

fn transaction_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::transactions;

    Router::new()
        .route(
            "/api/transactions",
            get(transactions::list_all).post(transactions::create),
        )
        .route("/api/transactions/:user_id", get(transactions::list))
}

fn summary_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::summary;

    Router::new()
        .route("/api/financial-summary/:user_id", get(summary::show))
        .route("/api/financial-summary/add/:user_id", post(summary::add))
}

fn advice_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::advice;

    Router::new()
        .route(
            "/api/ai-analysis/recommendations/:user_id",
            get(advice::recommendations),
        )
        .route("/api/ai-chat/:user_id", post(advice::chat))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "FinBin API",
        "version": version,
        "description": "Mock personal-finance backend with in-memory state",
        "endpoints": {
            "auth": "/api/auth/login, /api/auth/register (POST)",
            "buckets": "/api/buckets[/:userId[/:bucketId[/priority]]]",
            "transactions": "/api/transactions[/:userId]",
            "financial_summary": "/api/financial-summary/:userId, /api/financial-summary/add/:userId",
            "analysis": "/api/ai-analysis/recommendations/:userId",
            "chat": "/api/ai-chat/:userId",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
