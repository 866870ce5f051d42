//! YAML configuration I/O
//!
//! Works with any serde configuration type. Loading never fails: a missing
//! or broken file falls back to `T::default()` so the app still starts.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read and parse a config file, `Ok(None)` if it does not exist
fn read_config<T>(path: &Path) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(Some(config))
}

/// Load configuration from a YAML file
///
/// Missing file → defaults. Unreadable or invalid file → warning + defaults.
///
/// ```ignore
/// let config: BoardConfig = load_config(&default_config_path("slate-board"));
/// ```
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    match read_config(path) {
        Ok(Some(config)) => {
            log::info!("load_config: Loaded config from {:?}", path);
            config
        }
        Ok(None) => {
            log::info!("load_config: Config file doesn't exist, using defaults");
            T::default()
        }
        Err(e) => {
            log::warn!("load_config: {:#}, using defaults", e);
            T::default()
        }
    }
}

/// Save configuration to a YAML file, creating parent directories
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Saved to {:?}", path);
    Ok(())
}
