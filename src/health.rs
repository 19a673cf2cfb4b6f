//! Liveness endpoint for the hosting platform.
//!
//! Answers `GET /healthz` with `200 OK`. Shares nothing with the bot.

use anyhow::{Context, Result};
use axum::{http::StatusCode, routing::get, Router};
use log::{error, info};

/// Build the Axum router for the health check.
pub fn build_router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Start the health server in a background task.
///
/// Binding happens before this returns, so a taken port is reported to the caller.
pub async fn spawn_health_server(port: u16) -> Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health port {}", port))?;

    info!("Health endpoint listening on http://{}/healthz", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, build_router()).await {
            error!("Health server error: {}", e);
        }
    });

    Ok(())
}
