use crate::api::responses::{ApiResponse, CatalogResponse, StripeInfo};
use crate::catalog::{ReductionTechnique, StripeGeometry};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(CatalogResponse {
        drives: state.catalog.iter().cloned().collect(),
        stripes: StripeGeometry::ALL.into_iter().map(StripeInfo::from).collect(),
        techniques: ReductionTechnique::ALL.to_vec(),
    }))
}
