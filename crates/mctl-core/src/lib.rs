//! mctl-core: Configuration and shared types for mesheryctl
//!
//! This crate provides the configuration file model, context resolution,
//! error types and small formatting helpers used by the CLI.

pub mod config;
pub mod error;
pub mod time;

pub use config::{ComposeConfig, Context, MesheryCtlConfig, Platform};
pub use error::ConfigError;

/// Kubernetes namespace reserved for Meshery components
pub const MESHERY_NAMESPACE: &str = "meshery";

/// Substring whose presence in compose output means Meshery is running
pub const MESHERY_MARKER: &str = "meshery";

/// Endpoint of a local Meshery server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9081";
