use crate::api::responses::{ApiResponse, StatusResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_pools: state.config.max_pools,
        drive_models: state.catalog.len(),
        counters: state.counters.snapshot(),
    }))
}
