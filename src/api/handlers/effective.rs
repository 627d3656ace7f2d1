use crate::api::responses::{ApiResponse, EffectiveRequest, EffectiveResponse};
use crate::capacity::effective_from_usable;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn convert_effective(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EffectiveRequest>,
) -> impl IntoResponse {
    let ratio = req.ratio.unwrap_or(state.config.pool_defaults.ratio);
    info!("Converting {} TiB usable at {}:1", req.usable_tib, ratio);

    match effective_from_usable(req.usable_tib, ratio) {
        Ok(effective_tib) => Json(ApiResponse::ok(EffectiveResponse {
            usable_tib: req.usable_tib,
            ratio,
            effective_tib,
        })),
        Err(e) => Json(ApiResponse::<EffectiveResponse>::err(format!("Conversion failed: {e}"))),
    }
}
