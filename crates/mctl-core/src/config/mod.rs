//! Configuration management for mesheryctl

mod context;
pub mod serde_utils;

pub use context::{ComposeConfig, Context, MesheryCtlConfig, Platform};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Get the default configuration directory (`~/.meshery`)
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".meshery")
}

/// Get the default configuration file path
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Get the default compose file used for the docker platform
pub fn default_compose_file() -> PathBuf {
    default_config_dir().join("meshery.yaml")
}

/// Load configuration from a file
pub fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read config: {}", e)))?;

    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a file
pub fn save_config<T: serde::Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::Invalid(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(path, content)
        .map_err(|e| ConfigError::Invalid(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Write the default configuration to `path`.
///
/// Returns `Ok(false)` without touching the file when it already exists and
/// `force` is not set.
pub fn init_config(path: &Path, force: bool) -> Result<bool, ConfigError> {
    if path.exists() && !force {
        return Ok(false);
    }

    save_config(path, &MesheryCtlConfig::init_template())?;
    tracing::debug!("Wrote default configuration to {:?}", path);
    Ok(true)
}
