use crate::api::responses::{ApiResponse, SettingsUpdateRequest};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.config.clone()))
}

pub(crate) async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SettingsUpdateRequest>,
) -> impl IntoResponse {
    let mut config = state.config.clone();
    let defaults = &mut config.pool_defaults;

    if let Some(v) = req.drd_effective_tib {
        defaults.drd_effective_tib = v;
    }
    if let Some(v) = req.drs_effective_tib {
        defaults.drs_effective_tib = v;
    }
    if let Some(v) = req.ratio {
        defaults.ratio = v;
    }
    if let Some(v) = req.depletion_threshold_pct {
        defaults.depletion_threshold_pct = v;
    }
    if let Some(v) = req.journal_tib {
        defaults.journal_tib = v;
    }
    if let Some(v) = req.technique {
        defaults.technique = v;
    }
    if let Some(v) = req.drive_model {
        defaults.drive_model = v;
    }
    if let Some(v) = req.stripe {
        defaults.stripe = v;
    }
    if let Some(v) = req.max_pools {
        config.max_pools = v;
    }

    if let Err(e) = config.validate() {
        return Json(ApiResponse::<&str>::err(format!("Invalid settings: {e}")));
    }

    match config.save() {
        Ok(()) => Json(ApiResponse::ok("Settings saved (restart to apply)")),
        Err(e) => Json(ApiResponse::<&str>::err(format!("Failed to save settings: {e}"))),
    }
}
