use crate::capacity::round2;
use crate::catalog::{DriveCatalog, DriveModel, StripeGeometry};
use serde::Serialize;
use tracing::{debug, info};

pub(crate) const MIN_SWEEP_DRIVES: u32 = 9;
pub(crate) const MAX_SWEEP_DRIVES: u32 = 32;

/// Below this drive count only 6+2 DDPs are tabulated.
// TODO: confirm with product whether this should follow each stripe's own width.
pub(crate) const WIDE_STRIPE_MIN_DRIVES: u32 = 17;

/// Capacity left after the DDP's fixed virtualization tax.
const DDP_CAPACITY_FACTOR: f64 = 0.98;

/// Depletion threshold the report assumes.
const REPORT_DEPLETION: f64 = 0.9;

/// A named reduction scenario and its pre-solved divisor.
///
/// `divisor = 1 + garbage_rate + metadata_rate * ratio`, so that
/// `effective = ratio * usable / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ReductionColumn {
    pub(crate) label: &'static str,
    pub(crate) ratio: f64,
    pub(crate) divisor: f64,
}

/// Column order is part of the report format.
pub(crate) const REDUCTION_COLUMNS: [ReductionColumn; 8] = [
    ReductionColumn { label: "DRD-2:1", ratio: 2.0, divisor: 1.13 },
    ReductionColumn { label: "DRD-3:1", ratio: 3.0, divisor: 1.16 },
    ReductionColumn { label: "DRD-4:1", ratio: 4.0, divisor: 1.19 },
    ReductionColumn { label: "DRS-2:1", ratio: 2.0, divisor: 1.19 },
    ReductionColumn { label: "DRS-2.5:1", ratio: 2.5, divisor: 1.22 },
    ReductionColumn { label: "DRS-3:1", ratio: 3.0, divisor: 1.25 },
    ReductionColumn { label: "DRS-3.5:1", ratio: 3.5, divisor: 1.28 },
    ReductionColumn { label: "DRS-4:1", ratio: 4.0, divisor: 1.31 },
];

impl ReductionColumn {
    /// Effective GiB supported by `usable_gib` under this scenario.
    pub(crate) fn effective_gib(&self, usable_gib: f64) -> u64 {
        (self.ratio * usable_gib / self.divisor).floor() as u64
    }
}

/// One drive-count/model/stripe combination and the DDP capacity it yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SweepEntry {
    pub(crate) drive_count: u32,
    pub(crate) drive_model: String,
    pub(crate) stripe: StripeGeometry,
    pub(crate) ddp_capacity_gib: u64,
}

impl SweepEntry {
    /// Row key used by existing reports, e.g. `9_3.8TB-SSD_6+2`.
    pub(crate) fn config_key(&self) -> String {
        format!("{}_{}_{}", self.drive_count, self.drive_model, self.stripe)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct EffectiveCell {
    pub(crate) label: &'static str,
    pub(crate) effective_gib: u64,
}

/// A report row: the entry plus its 90% depletion and effective columns.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SweepRow {
    pub(crate) config: String,
    #[serde(flatten)]
    pub(crate) entry: SweepEntry,
    pub(crate) dp90_gib: f64,
    pub(crate) effective: Vec<EffectiveCell>,
}

impl From<SweepEntry> for SweepRow {
    fn from(entry: SweepEntry) -> Self {
        let dp90_gib = round2(entry.ddp_capacity_gib as f64 * REPORT_DEPLETION);
        let effective = REDUCTION_COLUMNS
            .iter()
            .map(|col| EffectiveCell { label: col.label, effective_gib: col.effective_gib(dp90_gib) })
            .collect();

        Self { config: entry.config_key(), entry, dp90_gib, effective }
    }
}

/// DDP capacity for a drive count; one drive's worth is held back as DDP overhead.
fn ddp_capacity_gib(drive_count: u32, drive: &DriveModel, stripe: StripeGeometry) -> u64 {
    let drives = f64::from(drive_count.saturating_sub(1));
    let capacity = drives * drive.effective_capacity_gib * stripe.efficiency() * DDP_CAPACITY_FACTOR;
    if capacity > 0.0 {
        capacity.floor() as u64
    } else {
        0
    }
}

/// Enumerate every tabulated combination, in report order.
pub(crate) fn sweep_entries(catalog: &DriveCatalog) -> Vec<SweepEntry> {
    let mut entries = Vec::new();

    for drive_count in MIN_SWEEP_DRIVES..=MAX_SWEEP_DRIVES {
        for drive in catalog.iter() {
            for stripe in StripeGeometry::ALL {
                if drive_count < WIDE_STRIPE_MIN_DRIVES && stripe != StripeGeometry::SixPlusTwo {
                    continue;
                }

                let ddp_capacity_gib = ddp_capacity_gib(drive_count, drive, stripe);
                if ddp_capacity_gib == 0 {
                    continue;
                }

                debug!(
                    "{} {} drives with {} provides {} GiB usable",
                    drive_count, drive.id, stripe, ddp_capacity_gib
                );
                entries.push(SweepEntry {
                    drive_count,
                    drive_model: drive.id.clone(),
                    stripe,
                    ddp_capacity_gib,
                });
            }
        }
    }

    entries
}

/// Build the full capacity sweep report.
pub(crate) fn sweep_report(catalog: &DriveCatalog) -> Vec<SweepRow> {
    let rows: Vec<SweepRow> = sweep_entries(catalog).into_iter().map(SweepRow::from).collect();
    info!(
        "Capacity sweep: {} rows over {}..={} drives, {} drive models",
        rows.len(),
        MIN_SWEEP_DRIVES,
        MAX_SWEEP_DRIVES,
        catalog.len()
    );
    rows
}
