use crate::catalog::{DriveModel, ReductionTechnique, StripeGeometry};
use serde::Serialize;

/// One pool's planning inputs. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Pool {
    /// Effective capacity eligible for dedupe (TiB).
    pub(crate) drd_effective_tib: f64,
    /// Effective capacity eligible for compression only (TiB).
    pub(crate) drs_effective_tib: f64,
    /// Attainment ratio, e.g. 4.0 for 4:1.
    pub(crate) ratio: f64,
    /// Percent of usable capacity the pool may fill (80..=100).
    pub(crate) depletion_threshold_pct: f64,
    /// Replication journal capacity (TiB), not reduced.
    pub(crate) journal_tib: f64,
    pub(crate) technique: ReductionTechnique,
    pub(crate) drive_model: String,
    pub(crate) stripe: StripeGeometry,
}

impl Pool {
    pub(crate) fn depletion_fraction(&self) -> f64 {
        self.depletion_threshold_pct / 100.0
    }

    pub(crate) fn total_effective_tib(&self) -> f64 {
        self.drd_effective_tib + self.drs_effective_tib
    }
}

/// Capacity consumed by the reduction engine (TiB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub(crate) struct Overhead {
    pub(crate) metadata_tib: f64,
    pub(crate) garbage_tib: f64,
}

/// Output of pool sizing: the raw capacity requirement and the overhead behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct PoolSizing {
    pub(crate) required_raw_tib: f64,
    pub(crate) overhead: Overhead,
}

/// Everything the layout planners need once a pool has been sized.
#[derive(Debug, Clone)]
pub(crate) struct LayoutRequest<'a> {
    pub(crate) raw_tib: f64,
    pub(crate) drive: &'a DriveModel,
    pub(crate) stripe: StripeGeometry,
    pub(crate) depletion_fraction: f64,
    pub(crate) technique: ReductionTechnique,
    pub(crate) ratio: f64,
    pub(crate) overhead: Overhead,
}

/// A balanced DDP before its spare drive is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DdpGroup {
    pub(crate) index: usize,
    pub(crate) drive_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DdpLayout {
    /// Drives needed for capacity and parity, before spares.
    pub(crate) required_drives: u32,
    pub(crate) groups: Vec<DdpGroup>,
    /// Per-group drive counts including the spare drive.
    pub(crate) configured_group_sizes: Vec<u32>,
    pub(crate) configured_drives: u32,
    /// Capacity delivered by `required_drives` after parity (TiB).
    pub(crate) ddp_capacity_tib: f64,
    pub(crate) max_usable_tib: f64,
    pub(crate) max_effective_tib: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RaidLayout {
    /// Data drives needed before parity is added.
    pub(crate) required_data_drives: u32,
    pub(crate) parity_group_count: u32,
    pub(crate) total_configured_drives: u32,
    pub(crate) recommended_spares: u32,
    /// Data capacity of the configured parity groups (TiB).
    pub(crate) raid_capacity_tib: f64,
    pub(crate) max_usable_tib: f64,
    pub(crate) max_effective_tib: f64,
}

/// Both candidate layouts for one pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PoolPlan {
    pub(crate) index: usize,
    pub(crate) drive_model: String,
    pub(crate) stripe: StripeGeometry,
    pub(crate) required_raw_tib: f64,
    pub(crate) total_effective_requested_tib: f64,
    pub(crate) journal_requested_tib: f64,
    pub(crate) overhead: Overhead,
    pub(crate) ddp: DdpLayout,
    pub(crate) raid: RaidLayout,
}
