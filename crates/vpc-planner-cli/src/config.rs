//! Planner configuration loading
//!
//! Reads `PlannerConfig` from `--config`, else `<config dir>/vpc-planner/config.toml`,
//! else falls back to the built-in limits.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use vpc_planner::PlannerConfig;

/// Default config path
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vpc-planner").join("config.toml"))
}

/// Load and validate the planner configuration
pub fn load_config(explicit: Option<&Path>) -> Result<PlannerConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_path().filter(|p| p.exists()),
    };

    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: PlannerConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            debug!(path = %path.display(), "Loaded planner config");
            config
        }
        None => PlannerConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
