use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::store;
use crate::waves::WavePlan;

pub const ENV_PREFIX: &str = "SKU_LAUNCH";

/// Settings layered from built-in defaults and `SKU_LAUNCH_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data_file: Option<PathBuf>,
    pub preview: usize,
    pub wave_size: usize,
    pub wave_interval_days: u64,
    pub default_year: i32,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let defaults = WavePlan::default();
        Config::builder()
            .set_default("preview", 3_i64)?
            .set_default("wave_size", defaults.wave_size as i64)?
            .set_default("wave_interval_days", defaults.interval_days as i64)?
            .set_default("default_year", i64::from(defaults.default_year))?
            .add_source(env)
            .build()
            .context("failed to build settings")?
            .try_deserialize()
            .context("invalid SKU_LAUNCH_* settings")
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(store::default_path)
    }

    pub fn wave_plan(&self) -> WavePlan {
        WavePlan {
            wave_size: self.wave_size,
            interval_days: self.wave_interval_days,
            default_year: self.default_year,
        }
    }
}
