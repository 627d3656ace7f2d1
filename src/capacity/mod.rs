//! Capacity conversion: effective → raw sizing and raw → physical layouts.

mod ddp;
mod effective;
mod error;
mod overhead;
mod raid;
mod session;
mod sizer;
mod types;

pub(crate) use effective::effective_from_usable;
pub(crate) use session::{plan_pools, PoolOutcome, MAX_POOLS};
pub(crate) use types::{Pool, PoolPlan};

#[cfg(test)]
pub(crate) use self::{
    ddp::{balance, group_count, plan_ddp, required_drives, MAX_DDP_DRIVES},
    effective::max_effective_tib,
    error::{PlanError, PoolError},
    overhead::overhead,
    raid::plan_raid,
    session::{plan_pool, PlanningSession},
    sizer::size_pool,
    types::{LayoutRequest, Overhead},
};

/// Most drives a single pool layout may span, spares excluded.
pub(crate) const MAX_POOL_DRIVES: u32 = 10_000;

/// Whole drives covering `drives`, or `CapacityTooLarge` past `MAX_POOL_DRIVES`.
pub(crate) fn whole_drives(drives: f64, raw_tib: f64) -> Result<u32, error::PoolError> {
    let drives = drives.ceil();
    if drives.is_nan() || drives > f64::from(MAX_POOL_DRIVES) {
        return Err(error::PoolError::CapacityTooLarge { raw_tib, max_drives: MAX_POOL_DRIVES });
    }
    Ok(if drives > 0.0 { drives as u32 } else { 0 })
}

/// Round to two decimal places, the precision every report uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
