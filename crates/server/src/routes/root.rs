//! Root endpoint handler.
//!
//! Returns service information and a list of all available routes.

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
///
/// Returns service metadata and a list of all available routes.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "docs": "https://github.com/paritytech/version-rest-api",
        "github": "https://github.com/paritytech/version-rest-api",
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.server.bind_host, state.config.server.port),
        "routes": routes
    }))
}
