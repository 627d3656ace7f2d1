use super::error::PoolError;
use super::types::Overhead;
use crate::catalog::ReductionTechnique;

/// Metadata and garbage overhead for a pool's reduced capacity.
///
/// DRD and DRS capacity are tracked separately because their metadata rates differ.
/// Compression-only pools hold garbage against all reduced data; with dedupe only
/// the DRD share produces garbage.
pub(crate) fn overhead(
    technique: ReductionTechnique,
    drd_effective_tib: f64,
    drs_effective_tib: f64,
    ratio: f64,
) -> Result<Overhead, PoolError> {
    let (drd_rate, drs_rate) = technique.metadata_rates();
    let garbage_rate = technique.garbage_rate();

    let overhead = match technique {
        ReductionTechnique::None => {
            if drd_effective_tib > 0.0 {
                return Err(PoolError::ReductionMismatch { drd_tib: drd_effective_tib });
            }
            Overhead::default()
        }
        ReductionTechnique::CompressionOnly => Overhead {
            metadata_tib: (drd_effective_tib * drd_rate) + (drs_effective_tib * drs_rate),
            garbage_tib: (drd_effective_tib + drs_effective_tib) / ratio * garbage_rate,
        },
        ReductionTechnique::CompressionAndDedupe => Overhead {
            metadata_tib: (drd_effective_tib * drd_rate) + (drs_effective_tib * drs_rate),
            garbage_tib: drd_effective_tib / ratio * garbage_rate,
        },
    };

    Ok(overhead)
}
