use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_DEPLETION_PCT, DEFAULT_DRD_TIB, DEFAULT_DRIVE, DEFAULT_DRS_TIB,
    DEFAULT_JOURNAL_TIB, DEFAULT_PORT, DEFAULT_RATIO, DEFAULT_STRIPE, DEFAULT_TECHNIQUE,
};
use crate::capacity::MAX_POOLS;
use crate::catalog::{ReductionTechnique, StripeGeometry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Values a planning request falls back to for any pool field it leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PoolDefaults {
    pub(crate) drd_effective_tib: f64,
    pub(crate) drs_effective_tib: f64,
    pub(crate) ratio: f64,
    pub(crate) depletion_threshold_pct: f64,
    pub(crate) journal_tib: f64,
    pub(crate) drive_model: String,
    pub(crate) stripe: StripeGeometry,
    pub(crate) technique: ReductionTechnique,
}

impl Default for PoolDefaults {
    fn default() -> Self {
        Self {
            drd_effective_tib: DEFAULT_DRD_TIB,
            drs_effective_tib: DEFAULT_DRS_TIB,
            ratio: DEFAULT_RATIO,
            depletion_threshold_pct: DEFAULT_DEPLETION_PCT,
            journal_tib: DEFAULT_JOURNAL_TIB,
            drive_model: DEFAULT_DRIVE.to_string(),
            stripe: DEFAULT_STRIPE,
            technique: DEFAULT_TECHNIQUE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) port: u16,
    pub(crate) config_path: String,
    /// Pools accepted per planning request.
    pub(crate) max_pools: usize,
    pub(crate) pool_defaults: PoolDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            max_pools: MAX_POOLS,
            pool_defaults: PoolDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub(crate) fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("DDP_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        if let Ok(port) = std::env::var("DDP_PORT") {
            config.port = port.parse().context("DDP_PORT must be a valid port number")?;
        }

        config.validate()?;
        Ok(config)
    }
}
