use thiserror::Error;

/// Input validation failure for a single pool.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum PoolError {
    #[error("depletion threshold {threshold_pct}% must be between 80 and 100%")]
    DepletionThresholdOutOfRange { threshold_pct: f64 },

    #[error("'No Data Reduction' set, but {drd_tib} TiB of DRD capacity requested")]
    ReductionMismatch { drd_tib: f64 },

    #[error("reduction ratio {ratio} must be greater than zero")]
    NonPositiveRatio { ratio: f64 },

    #[error("{field} capacity must not be negative (got {value} TiB)")]
    NegativeCapacity { field: &'static str, value: f64 },

    #[error("{raw_tib} TiB raw needs more than {max_drives} drives")]
    CapacityTooLarge { raw_tib: f64, max_drives: u32 },

    #[error("unknown drive model: {model}")]
    UnknownDriveModel { model: String },
}

/// Errors surfaced by a planning session.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum PlanError {
    /// A single pool was rejected; sibling pools are unaffected.
    #[error("pool {index}: {source}")]
    Pool { index: usize, source: PoolError },

    /// Raised before any per-pool work begins.
    #[error("{requested} pools requested, currently supporting up to {max}")]
    PoolCountExceeded { requested: usize, max: usize },
}

impl PlanError {
    pub(crate) const fn pool(index: usize, source: PoolError) -> Self {
        Self::Pool { index, source }
    }
}
