use super::error::PoolError;
use super::round2;
use super::types::Overhead;
use crate::catalog::ReductionTechnique;

/// DRS metadata rate assumed by the standalone converter.
const CONVERTER_METADATA_RATE: f64 = 0.06;
/// 1 + garbage rate.
const CONVERTER_GARBAGE_FACTOR: f64 = 1.07;

/// Effective capacity a layout can hold once the reduction engine takes its share.
///
/// Without data reduction the usable capacity is the effective capacity.
pub(crate) fn max_effective_tib(
    max_usable_tib: f64,
    technique: ReductionTechnique,
    overhead: &Overhead,
    ratio: f64,
) -> f64 {
    if technique.reduces() {
        round2((max_usable_tib - overhead.garbage_tib - overhead.metadata_tib) * ratio)
    } else {
        round2(max_usable_tib)
    }
}

/// Effective capacity supported by a given usable capacity.
///
/// Solves `usable = 1.07 * effective / ratio + 0.06 * effective` for `effective`.
pub(crate) fn effective_from_usable(usable_tib: f64, ratio: f64) -> Result<f64, PoolError> {
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(PoolError::NonPositiveRatio { ratio });
    }
    if usable_tib.is_nan() || usable_tib < 0.0 {
        return Err(PoolError::NegativeCapacity { field: "usable", value: usable_tib });
    }

    Ok(round2(ratio * usable_tib / ((ratio * CONVERTER_METADATA_RATE) + CONVERTER_GARBAGE_FACTOR)))
}
