use crate::capacity::{Pool, PoolOutcome, PoolPlan};
use crate::catalog::{DriveModel, ReductionTechnique, StripeGeometry};
use crate::config::PoolDefaults;
use crate::state::CounterSnapshot;
use crate::sweep::{ReductionColumn, SweepRow};
use serde::{Deserialize, Serialize};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

/// One pool in a POST /api/plan body. Omitted fields take the configured defaults.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PoolRequest {
    pub(crate) drd_effective_tib: Option<f64>,
    pub(crate) drs_effective_tib: Option<f64>,
    pub(crate) ratio: Option<f64>,
    pub(crate) depletion_threshold_pct: Option<f64>,
    pub(crate) journal_tib: Option<f64>,
    pub(crate) technique: Option<ReductionTechnique>,
    pub(crate) drive_model: Option<String>,
    pub(crate) stripe: Option<StripeGeometry>,
}

impl PoolRequest {
    pub(crate) fn into_pool(self, defaults: &PoolDefaults) -> Pool {
        let technique = self.technique.unwrap_or(defaults.technique);
        // DRD capacity only exists with data reduction; don't inherit the default without it.
        let drd_default = if technique.reduces() { defaults.drd_effective_tib } else { 0.0 };

        Pool {
            drd_effective_tib: self.drd_effective_tib.unwrap_or(drd_default),
            drs_effective_tib: self.drs_effective_tib.unwrap_or(defaults.drs_effective_tib),
            ratio: self.ratio.unwrap_or(defaults.ratio),
            depletion_threshold_pct: self
                .depletion_threshold_pct
                .unwrap_or(defaults.depletion_threshold_pct),
            journal_tib: self.journal_tib.unwrap_or(defaults.journal_tib),
            technique,
            drive_model: self.drive_model.unwrap_or_else(|| defaults.drive_model.clone()),
            stripe: self.stripe.unwrap_or(defaults.stripe),
        }
    }
}

/// Request body for POST /api/plan.
#[derive(Debug, Deserialize)]
pub(crate) struct PlanRequest {
    #[serde(default)]
    pub(crate) pools: Vec<PoolRequest>,
}

/// Per-pool entry of a plan response: either a plan or the reason it was rejected.
#[derive(Debug, Serialize)]
pub(crate) struct PoolResult {
    pub(crate) index: usize,
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) plan: Option<PoolPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl From<PoolOutcome> for PoolResult {
    fn from(outcome: PoolOutcome) -> Self {
        match outcome.result {
            Ok(plan) => Self { index: outcome.index, success: true, plan: Some(plan), error: None },
            Err(e) => {
                Self { index: outcome.index, success: false, plan: None, error: Some(e.to_string()) }
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PlanResponse {
    pub(crate) pools: Vec<PoolResult>,
}

/// Request body for POST /api/effective.
#[derive(Debug, Deserialize)]
pub(crate) struct EffectiveRequest {
    pub(crate) usable_tib: f64,
    pub(crate) ratio: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EffectiveResponse {
    pub(crate) usable_tib: f64,
    pub(crate) ratio: f64,
    pub(crate) effective_tib: f64,
}

/// Request body for POST /api/settings.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsUpdateRequest {
    pub(crate) max_pools: Option<usize>,
    pub(crate) drd_effective_tib: Option<f64>,
    pub(crate) drs_effective_tib: Option<f64>,
    pub(crate) ratio: Option<f64>,
    pub(crate) depletion_threshold_pct: Option<f64>,
    pub(crate) journal_tib: Option<f64>,
    pub(crate) technique: Option<ReductionTechnique>,
    pub(crate) drive_model: Option<String>,
    pub(crate) stripe: Option<StripeGeometry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub(crate) version: String,
    pub(crate) max_pools: usize,
    pub(crate) drive_models: usize,
    pub(crate) counters: CounterSnapshot,
}

#[derive(Debug, Serialize)]
pub(crate) struct StripeInfo {
    pub(crate) name: StripeGeometry,
    pub(crate) data_drives: u32,
    pub(crate) total_drives: u32,
    pub(crate) efficiency: f64,
}

impl From<StripeGeometry> for StripeInfo {
    fn from(stripe: StripeGeometry) -> Self {
        Self {
            name: stripe,
            data_drives: stripe.data_drives(),
            total_drives: stripe.total_drives(),
            efficiency: stripe.efficiency(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) drives: Vec<DriveModel>,
    pub(crate) stripes: Vec<StripeInfo>,
    pub(crate) techniques: Vec<ReductionTechnique>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SweepResponse {
    pub(crate) columns: Vec<ReductionColumn>,
    pub(crate) rows: Vec<SweepRow>,
}
