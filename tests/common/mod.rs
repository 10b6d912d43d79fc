use anyhow::Result;

use finbin::server::{app, AppState};

pub struct TestServer {
    pub base_url: String,
}

/// Serve a freshly seeded backend on an unused port inside the test
/// runtime. Each suite gets isolated state because the backend is nothing
/// but an in-memory seed.
pub async fn spawn_server() -> Result<TestServer> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::seeded()))
            .await
            .expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}
