use crate::api::responses::{ApiResponse, SweepResponse};
use crate::events::Event;
use crate::sweep::{render_csv, sweep_report, SweepRow, REDUCTION_COLUMNS};
use crate::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::sync::Arc;

fn run_sweep(state: &AppState) -> Vec<SweepRow> {
    let rows = sweep_report(&state.catalog);
    state.counters.record_sweep();
    let _ = state.event_hub.publish(Event::SweepComplete { rows: rows.len() as u32 });
    rows
}

pub(crate) async fn get_sweep(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rows = run_sweep(&state);
    Json(ApiResponse::ok(SweepResponse { columns: REDUCTION_COLUMNS.to_vec(), rows }))
}

pub(crate) async fn get_sweep_csv(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rows = run_sweep(&state);
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], render_csv(&rows))
}
