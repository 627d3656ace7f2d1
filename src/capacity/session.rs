use super::ddp::plan_ddp;
use super::error::{PlanError, PoolError};
use super::raid::plan_raid;
use super::sizer::size_pool;
use super::types::{LayoutRequest, Pool, PoolPlan};
use crate::catalog::DriveCatalog;
use tracing::{info, warn};

/// Most pools a single planning session accepts.
pub(crate) const MAX_POOLS: usize = 3;

/// Result of planning one pool in a session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PoolOutcome {
    pub(crate) index: usize,
    pub(crate) result: Result<PoolPlan, PlanError>,
}

/// Size one pool and produce both its DDP and RAID layouts.
pub(crate) fn plan_pool(
    index: usize,
    pool: &Pool,
    catalog: &DriveCatalog,
) -> Result<PoolPlan, PoolError> {
    let sizing = size_pool(pool)?;
    let drive = catalog
        .get(&pool.drive_model)
        .ok_or_else(|| PoolError::UnknownDriveModel { model: pool.drive_model.clone() })?;

    info!(
        "Pool {}: {} TiB raw required for {} TiB effective + {} TiB journal",
        index,
        sizing.required_raw_tib,
        pool.total_effective_tib(),
        pool.journal_tib
    );

    let req = LayoutRequest {
        raw_tib: sizing.required_raw_tib,
        drive,
        stripe: pool.stripe,
        depletion_fraction: pool.depletion_fraction(),
        technique: pool.technique,
        ratio: pool.ratio,
        overhead: sizing.overhead,
    };

    Ok(PoolPlan {
        index,
        drive_model: drive.id.clone(),
        stripe: pool.stripe,
        required_raw_tib: sizing.required_raw_tib,
        total_effective_requested_tib: pool.total_effective_tib(),
        journal_requested_tib: pool.journal_tib,
        overhead: sizing.overhead,
        ddp: plan_ddp(&req)?,
        raid: plan_raid(&req)?,
    })
}

/// Pools collected for one planning request.
///
/// Pools are planned independently: a rejected pool never stops its siblings.
#[derive(Debug)]
pub(crate) struct PlanningSession<'a> {
    catalog: &'a DriveCatalog,
    max_pools: usize,
    pools: Vec<Pool>,
}

impl<'a> PlanningSession<'a> {
    pub(crate) const fn new(catalog: &'a DriveCatalog, max_pools: usize) -> Self {
        Self { catalog, max_pools, pools: Vec::new() }
    }

    /// Add a pool, returning its index.
    pub(crate) fn add_pool(&mut self, pool: Pool) -> Result<usize, PlanError> {
        if self.pools.len() >= self.max_pools {
            warn!("Too many pools: currently supporting up to {}", self.max_pools);
            return Err(PlanError::PoolCountExceeded {
                requested: self.pools.len() + 1,
                max: self.max_pools,
            });
        }
        self.pools.push(pool);
        Ok(self.pools.len() - 1)
    }

    pub(crate) fn len(&self) -> usize {
        self.pools.len()
    }

    /// Plan every pool, collecting successes and failures side by side.
    pub(crate) fn plan(&self) -> Vec<PoolOutcome> {
        self.pools
            .iter()
            .enumerate()
            .map(|(index, pool)| {
                let result = plan_pool(index, pool, self.catalog).map_err(|e| {
                    warn!("Pool {} rejected: {}", index, e);
                    PlanError::pool(index, e)
                });
                PoolOutcome { index, result }
            })
            .collect()
    }
}

/// Plan a batch of pools, rejecting the whole batch if it exceeds `max_pools`.
pub(crate) fn plan_pools(
    pools: Vec<Pool>,
    catalog: &DriveCatalog,
    max_pools: usize,
) -> Result<Vec<PoolOutcome>, PlanError> {
    let mut session = PlanningSession::new(catalog, max_pools);
    if pools.len() > max_pools {
        return Err(PlanError::PoolCountExceeded { requested: pools.len(), max: max_pools });
    }
    for pool in pools {
        session.add_pool(pool)?;
    }
    info!("Planning {} pool(s)", session.len());
    Ok(session.plan())
}
