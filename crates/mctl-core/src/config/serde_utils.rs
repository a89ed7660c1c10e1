//! Shared serialization/deserialization utilities for configuration
//!
//! This module provides common serde helpers used across configuration types.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the current user's home directory.
///
/// Paths without the prefix, or systems without a home directory, are
/// returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Helper module for paths that may start with `~/`
///
/// Deserialization expands the home directory prefix so the rest of the
/// program only sees absolute paths.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "mctl_core::config::serde_utils::tilde_path")]
///     file: PathBuf,
/// }
/// ```
pub mod tilde_path {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::path::PathBuf;

    /// Serialize a path as a display string
    pub fn serialize<S>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&path.display())
    }

    /// Deserialize a path, expanding a leading `~/`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = PathBuf::deserialize(deserializer)?;
        Ok(super::expand_tilde(&raw))
    }
}
