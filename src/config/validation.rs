use super::settings::AppConfig;
use crate::capacity::MAX_POOLS;
use crate::catalog::DriveCatalog;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        let d = &self.pool_defaults;
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        anyhow::ensure!(
            self.max_pools >= 1 && self.max_pools <= MAX_POOLS,
            "max_pools must be between 1 and {MAX_POOLS}"
        );
        anyhow::ensure!(d.ratio > 0.0, "default ratio must be > 0");
        anyhow::ensure!(
            (80.0..=100.0).contains(&d.depletion_threshold_pct),
            "default depletion threshold must be between 80 and 100"
        );
        anyhow::ensure!(
            d.drd_effective_tib >= 0.0 && d.drs_effective_tib >= 0.0 && d.journal_tib >= 0.0,
            "default capacities must not be negative"
        );
        anyhow::ensure!(
            d.technique.reduces() || d.drd_effective_tib <= 0.0,
            "default DRD capacity must be 0 when no data reduction is selected"
        );
        anyhow::ensure!(
            DriveCatalog::builtin().get(&d.drive_model).is_some(),
            "unknown default drive model: {}",
            d.drive_model
        );
        Ok(())
    }
}
