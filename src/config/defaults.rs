use crate::catalog::{ReductionTechnique, StripeGeometry};

/// Default path of the daemon's KEY="VALUE" settings file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/ddp-configurator/ddp-configurator.cfg";

/// Default port the daemon listens on (localhost only).
pub(super) const DEFAULT_PORT: u16 = 7093;

/// Default pool form values, used for any field a planning request omits.
pub(super) const DEFAULT_DRD_TIB: f64 = 500.0;
pub(super) const DEFAULT_DRS_TIB: f64 = 400.0;
pub(super) const DEFAULT_RATIO: f64 = 4.0;
pub(super) const DEFAULT_DEPLETION_PCT: f64 = 90.0;
pub(super) const DEFAULT_JOURNAL_TIB: f64 = 10.0;
pub(super) const DEFAULT_DRIVE: &str = "30TB-SSD";
pub(super) const DEFAULT_STRIPE: StripeGeometry = StripeGeometry::SixPlusTwo;
pub(super) const DEFAULT_TECHNIQUE: ReductionTechnique = ReductionTechnique::CompressionAndDedupe;
