//! HTTP API.
//!
//! Exposes four GET endpoints under `/weatherforecast`:
//! - `/weatherforecast` - five synthetic forecasts (JSON)
//! - `/weatherforecast/private` - the authenticated caller's name (bearer token required)
//! - `/weatherforecast/url?id={id}` - stored URL lookup
//! - `/weatherforecast/proxy` - upstream weather API pass-through

mod auth;
mod handlers;
mod state;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;

use handlers::{forecast_handler, private_handler, proxy_handler, url_handler};

pub use auth::Authenticated;
pub use state::AppState;

/// Builds the router with every endpoint bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/weatherforecast", get(forecast_handler))
        .route("/weatherforecast/private", get(private_handler))
        .route("/weatherforecast/url", get(url_handler))
        .route("/weatherforecast/proxy", get(proxy_handler))
        .with_state(state)
}

/// Binds `addr` and serves the API until Ctrl-C.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    log::info!("API server listening on http://{}/", addr);
    log::info!("  - Forecast: http://{}/weatherforecast", addr);
    log::info!("  - Proxy: http://{}/weatherforecast/proxy", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving instead of exiting immediately
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, draining connections");
}

