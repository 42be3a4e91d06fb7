//! Health API

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::server::GatewayState;

/// Handler for `GET /api/health`.
pub async fn get_health(State(state): State<GatewayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "planty",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.model.name(),
    }))
}
