use finbin::server::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up FINBIN_PORT, FINBIN_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = finbin::config::config();
    tracing::info!("Starting FinBin mock API in {:?} mode", config.environment);

    let app = app(AppState::seeded());

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("FinBin mock API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
