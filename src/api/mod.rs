mod handlers;
pub(crate) mod responses;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete API router.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        // Status
        .route("/api/status", get(handlers::get_status))
        // Catalogs
        .route("/api/catalog", get(handlers::get_catalog))
        // Planning
        .route("/api/plan", post(handlers::handle_plan))
        .route("/api/effective", post(handlers::convert_effective))
        // Sweep report
        .route("/api/sweep", get(handlers::get_sweep))
        .route("/api/sweep/csv", get(handlers::get_sweep_csv))
        // Settings
        .route("/api/settings", get(handlers::get_settings))
        .route("/api/settings", post(handlers::update_settings))
        // SSE events
        .route("/api/events", get(handlers::sse_events))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
