//! Engine configuration loading for the CLI.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! then `GONGFEN_*` environment variables (e.g. `GONGFEN_LATE_LADDER=fixed_days`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use gongfen_engine::EngineConfig;

pub const ENV_PREFIX: &str = "GONGFEN";

/// `<config_dir>/gongfen/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gongfen").join("config.toml"))
}

/// Load and validate the engine configuration.
///
/// An explicitly given `path` must exist; the default path is optional.
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let mut builder = Config::builder();
    match path {
        Some(p) => builder = builder.add_source(File::from(p).required(true)),
        None => {
            if let Some(p) = default_config_path() {
                builder = builder.add_source(File::from(p).required(false));
            }
        }
    }
    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let cfg: EngineConfig = builder
        .build()
        .context("failed to read configuration")?
        .try_deserialize()
        .context("invalid configuration")?;
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}
