use super::effective::max_effective_tib;
use super::error::PoolError;
use super::types::{DdpGroup, DdpLayout, LayoutRequest};
use super::{whole_drives, MAX_POOL_DRIVES};
use crate::catalog::{DriveModel, StripeGeometry};
use tracing::{debug, info};

/// Most drives a single DDP may hold before another DDP is needed.
pub(crate) const MAX_DDP_DRIVES: u32 = 31;

/// Spare drives added to every DDP after balancing.
pub(crate) const SPARES_PER_DDP: u32 = 1;

/// Drives needed to hold `raw_tib` after parity, never less than one full stripe.
pub(crate) fn required_drives(
    raw_tib: f64,
    drive: &DriveModel,
    stripe: StripeGeometry,
) -> Result<u32, PoolError> {
    let drives =
        whole_drives(raw_tib * 1024.0 / drive.effective_capacity_gib / stripe.efficiency(), raw_tib)?;

    if drives < stripe.total_drives() {
        debug!("Padding {} drives up to a full {} stripe", drives, stripe);
        return Ok(stripe.total_drives());
    }
    Ok(drives)
}

/// Fewest DDPs that keep every group within `MAX_DDP_DRIVES`.
pub(crate) const fn group_count(required_drives: u32) -> u32 {
    required_drives / MAX_DDP_DRIVES + 1
}

/// Spread `drive_count` drives over `group_count` groups.
///
/// Every group gets the same share; the leftover drives go one each to the
/// lowest-indexed groups, so sizes never differ by more than one.
pub(crate) fn balance(drive_count: u32, group_count: u32) -> Vec<DdpGroup> {
    if group_count == 0 {
        return Vec::new();
    }

    let best_fit = drive_count / group_count;
    let leftover = drive_count % group_count;

    let groups: Vec<DdpGroup> = (0..group_count)
        .map(|i| DdpGroup {
            index: i as usize,
            drive_count: if i < leftover { best_fit + 1 } else { best_fit },
        })
        .collect();

    debug!("Balanced {} drives over {} DDPs: {:?}", drive_count, group_count, groups);
    groups
}

/// Lay out the raw requirement as one or more balanced DDPs.
pub(crate) fn plan_ddp(req: &LayoutRequest<'_>) -> Result<DdpLayout, PoolError> {
    let required_drives = required_drives(req.raw_tib, req.drive, req.stripe)?;
    let group_count = group_count(required_drives);
    let configured_drives = group_count
        .checked_mul(SPARES_PER_DDP)
        .and_then(|spares| required_drives.checked_add(spares))
        .ok_or(PoolError::CapacityTooLarge { raw_tib: req.raw_tib, max_drives: MAX_POOL_DRIVES })?;

    let groups = balance(required_drives, group_count);
    let configured_group_sizes: Vec<u32> =
        groups.iter().map(|g| g.drive_count + SPARES_PER_DDP).collect();

    let ddp_capacity_tib =
        f64::from(required_drives) * req.drive.effective_capacity_gib / 1024.0 * req.stripe.efficiency();
    let max_usable_tib = ddp_capacity_tib * req.depletion_fraction;
    let max_effective_tib = max_effective_tib(max_usable_tib, req.technique, &req.overhead, req.ratio);

    info!(
        "DDP plan: {} required drives in {} DDPs, {} configured, {:.2} TiB, {} TiB effective",
        required_drives, group_count, configured_drives, ddp_capacity_tib, max_effective_tib
    );

    Ok(DdpLayout {
        required_drives,
        groups,
        configured_group_sizes,
        configured_drives,
        ddp_capacity_tib,
        max_usable_tib,
        max_effective_tib,
    })
}
