use crate::api::responses::{ApiResponse, PlanRequest, PlanResponse, PoolResult};
use crate::capacity::{plan_pools, Pool};
use crate::events::Event;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

pub(crate) async fn handle_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> impl IntoResponse {
    let pools: Vec<Pool> = req
        .pools
        .into_iter()
        .map(|p| p.into_pool(&state.config.pool_defaults))
        .collect();

    let outcomes = match plan_pools(pools, &state.catalog, state.config.max_pools) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            warn!("Plan request rejected: {e}");
            let _ = state.event_hub.publish(Event::DaemonError { message: e.to_string() });
            return Json(ApiResponse::<PlanResponse>::err(format!("Planning failed: {e}")));
        }
    };

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    let ddp_drives: u64 = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .map(|plan| u64::from(plan.ddp.configured_drives))
        .sum();

    state.counters.record_plan(rejected as u64);
    let _ = state.event_hub.publish(Event::PlanReady {
        pools_planned: (outcomes.len() - rejected) as u32,
        pools_rejected: rejected as u32,
        ddp_drives,
    });

    Json(ApiResponse::ok(PlanResponse {
        pools: outcomes.into_iter().map(PoolResult::from).collect(),
    }))
}
