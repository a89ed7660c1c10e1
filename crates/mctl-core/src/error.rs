//! Core error types for mesheryctl

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialize error
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Named context is not present in the config file
    #[error("context `{0}` does not exist")]
    ContextNotFound(String),

    /// Config file does not select a current context
    #[error("no current context set")]
    NoCurrentContext,

    /// Context names a platform mesheryctl cannot manage
    #[error("unsupported platform `{0}`, expected `docker` or `kubernetes`")]
    UnsupportedPlatform(String),
}
