//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

use planty_core::VisionModel;

use crate::{control_ui, health_api, identify};

/// Application state shared across routes.
///
/// Holds the single vision model handle, built at startup and reused by every
/// request for the life of the process.
#[derive(Clone)]
pub struct GatewayState {
    pub model: Arc<dyn VisionModel>,
}

impl GatewayState {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }
}

/// Build the application router.
///
/// `max_upload_bytes` caps the request body accepted by the identify route.
pub fn build_router(state: GatewayState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/identify-plant", post(identify::identify_plant_handler))
        .route("/api/health", get(health_api::get_health))
        .merge(control_ui::ui_router())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the Axum HTTP server and runs until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState, max_upload_bytes: usize) -> Result<()> {
    let app = build_router(state, max_upload_bytes);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Planty HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Planty HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
