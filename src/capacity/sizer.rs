use super::error::PoolError;
use super::overhead::overhead;
use super::round2;
use super::types::{Pool, PoolSizing};
use tracing::debug;

pub(crate) const MIN_DEPLETION_FRACTION: f64 = 0.80;
pub(crate) const MAX_DEPLETION_FRACTION: f64 = 1.00;

/// Reject inputs that make the sizing formula meaningless.
fn validate(pool: &Pool) -> Result<(), PoolError> {
    let depletion = pool.depletion_fraction();
    if !(MIN_DEPLETION_FRACTION..=MAX_DEPLETION_FRACTION).contains(&depletion) {
        return Err(PoolError::DepletionThresholdOutOfRange {
            threshold_pct: pool.depletion_threshold_pct,
        });
    }

    if !pool.technique.reduces() && pool.drd_effective_tib > 0.0 {
        return Err(PoolError::ReductionMismatch { drd_tib: pool.drd_effective_tib });
    }

    if pool.ratio.is_nan() || pool.ratio <= 0.0 {
        return Err(PoolError::NonPositiveRatio { ratio: pool.ratio });
    }

    for (field, value) in [
        ("DRD effective", pool.drd_effective_tib),
        ("DRS effective", pool.drs_effective_tib),
        ("journal", pool.journal_tib),
    ] {
        if value.is_nan() || value < 0.0 {
            return Err(PoolError::NegativeCapacity { field, value });
        }
    }

    Ok(())
}

/// Size a pool: raw TiB needed before the depletion margin is taken away.
///
/// ```text
/// raw = (journal + (drd + drs)/ratio + metadata + garbage) / (depletion/100)
/// ```
pub(crate) fn size_pool(pool: &Pool) -> Result<PoolSizing, PoolError> {
    validate(pool)?;

    let overhead =
        overhead(pool.technique, pool.drd_effective_tib, pool.drs_effective_tib, pool.ratio)?;

    debug!(
        "raw = ({} + ({} + {}) / {} + {} + {}) / {}",
        pool.journal_tib,
        pool.drd_effective_tib,
        pool.drs_effective_tib,
        pool.ratio,
        overhead.metadata_tib,
        overhead.garbage_tib,
        pool.depletion_fraction()
    );

    let required_raw_tib = round2(
        (pool.journal_tib
            + (pool.total_effective_tib() / pool.ratio)
            + overhead.metadata_tib
            + overhead.garbage_tib)
            / pool.depletion_fraction(),
    );

    Ok(PoolSizing { required_raw_tib, overhead })
}
