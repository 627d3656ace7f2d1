use super::settings::AppConfig;
use crate::catalog::{ReductionTechnique, StripeGeometry};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');
                let defaults = &mut self.pool_defaults;

                match key {
                    "PORT" => {
                        if let Ok(v) = value.parse() {
                            self.port = v;
                        }
                    }
                    "MAX_POOLS" => {
                        if let Ok(v) = value.parse() {
                            self.max_pools = v;
                        }
                    }
                    "DEFAULT_DRD_TIB" => {
                        if let Ok(v) = value.parse() {
                            defaults.drd_effective_tib = v;
                        }
                    }
                    "DEFAULT_DRS_TIB" => {
                        if let Ok(v) = value.parse() {
                            defaults.drs_effective_tib = v;
                        }
                    }
                    "DEFAULT_RATIO" => {
                        if let Ok(v) = value.parse() {
                            defaults.ratio = v;
                        }
                    }
                    "DEFAULT_DEPLETION" => {
                        if let Ok(v) = value.parse() {
                            defaults.depletion_threshold_pct = v;
                        }
                    }
                    "DEFAULT_JOURNAL_TIB" => {
                        if let Ok(v) = value.parse() {
                            defaults.journal_tib = v;
                        }
                    }
                    "DEFAULT_DRIVE" => {
                        if !value.is_empty() {
                            defaults.drive_model = value.to_string();
                        }
                    }
                    "DEFAULT_STRIPE" => {
                        if let Ok(v) = StripeGeometry::try_from(value) {
                            defaults.stripe = v;
                        }
                    }
                    "DEFAULT_TECHNIQUE" => {
                        if let Ok(v) = ReductionTechnique::try_from(value) {
                            defaults.technique = v;
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }

    /// Save current config back to the INI file.
    pub(crate) fn save(&self) -> Result<()> {
        let d = &self.pool_defaults;
        let contents = format!(
            r#"# DDP configurator settings
# Auto-generated, edit via the settings API
PORT="{}"
MAX_POOLS="{}"
DEFAULT_DRD_TIB="{}"
DEFAULT_DRS_TIB="{}"
DEFAULT_RATIO="{}"
DEFAULT_DEPLETION="{}"
DEFAULT_JOURNAL_TIB="{}"
DEFAULT_DRIVE="{}"
DEFAULT_STRIPE="{}"
DEFAULT_TECHNIQUE="{}"
"#,
            self.port,
            self.max_pools,
            d.drd_effective_tib,
            d.drs_effective_tib,
            d.ratio,
            d.depletion_threshold_pct,
            d.journal_tib,
            d.drive_model,
            d.stripe,
            d.technique,
        );

        if let Some(parent) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config to {}", self.config_path))?;

        Ok(())
    }
}
