use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{logging, metrics, routes, state::AppState};

/// JSON 404 for anything the router does not match. This includes
/// `/download/` with an empty version id, which never reaches the
/// download handler because the path parameter cannot be empty.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let router = Router::new()
        .route("/", get(routes::root::root_handler))
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::download::routes(registry))
        .merge(routes::metrics::routes())
        .fallback(not_found);

    // The metrics middleware buffers response bodies to measure them, so it
    // is only attached when metrics collection is enabled.
    let router = if state.config.metrics.enabled {
        router.layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::metrics_middleware,
        ))
    } else {
        router
    };

    router
        .layer(middleware::from_fn(logging::http_logger_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
