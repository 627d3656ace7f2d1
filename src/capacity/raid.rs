use super::effective::max_effective_tib;
use super::error::PoolError;
use super::types::{LayoutRequest, RaidLayout};
use super::{round2, whole_drives, MAX_POOL_DRIVES};
use tracing::info;

/// One spare is recommended for every 32 parity-group drives, plus one.
pub(crate) const DRIVES_PER_SPARE: u32 = 32;

/// Lay out the raw requirement as traditional fixed parity groups.
pub(crate) fn plan_raid(req: &LayoutRequest<'_>) -> Result<RaidLayout, PoolError> {
    let too_large = PoolError::CapacityTooLarge { raw_tib: req.raw_tib, max_drives: MAX_POOL_DRIVES };
    let required_data_drives =
        whole_drives(req.raw_tib * 1024.0 / req.drive.effective_capacity_gib, req.raw_tib)?;

    let parity_group_count = required_data_drives.div_ceil(req.stripe.data_drives());
    let total_configured_drives =
        parity_group_count.checked_mul(req.stripe.total_drives()).ok_or(too_large)?;
    let recommended_spares = total_configured_drives / DRIVES_PER_SPARE + 1;

    let pg_data_drives = f64::from(parity_group_count * req.stripe.data_drives());
    let raid_capacity_tib = pg_data_drives * req.drive.effective_capacity_gib / 1024.0;
    let max_usable_tib = raid_capacity_tib * req.depletion_fraction;
    let max_effective_tib = max_effective_tib(max_usable_tib, req.technique, &req.overhead, req.ratio);

    info!(
        "RAID plan: {} data drives, {} x {} parity groups, {} drives + {} spares, {} TiB effective",
        required_data_drives,
        parity_group_count,
        req.stripe,
        total_configured_drives,
        recommended_spares,
        max_effective_tib
    );

    Ok(RaidLayout {
        required_data_drives,
        parity_group_count,
        total_configured_drives,
        recommended_spares,
        raid_capacity_tib: round2(raid_capacity_tib),
        max_usable_tib,
        max_effective_tib,
    })
}
