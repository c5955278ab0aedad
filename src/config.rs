// src/config.rs

//! Configuration loading utilities.
//!
//! Configuration is assembled once at process start: an optional TOML file,
//! then environment overrides, then validation.

use std::path::Path;

use crate::error::Result;
use crate::models::{Config, env};

/// Load configuration from an optional file and the given variable lookup.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            Config::load_or_default(path)
        }
        None => Config::default(),
    };

    config.apply_env(lookup)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from the process environment.
///
/// The file named by `LTI_TRACKER_CONFIG` is read first when set.
pub fn load_from_env() -> Result<Config> {
    let path = std::env::var(env::CONFIG_PATH).ok();
    load_with(path.as_deref().map(Path::new), |key| std::env::var(key).ok())
}
