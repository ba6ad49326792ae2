//! Change reporting configuration

use crate::strategy::CompareStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a [`ChangeReportConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid change report config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a property's changes are compared and summarized
///
/// ```toml
/// strategy = "normalized"
/// include_added = true
/// max_reported_changes = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeReportConfig {
    /// Path-identity policy (default: normalized)
    pub strategy: CompareStrategy,

    /// Report files that only exist in the current state (default: true)
    pub include_added: bool,

    /// Stop after this many changes (default: 3)
    pub max_reported_changes: usize,
}

impl Default for ChangeReportConfig {
    fn default() -> Self {
        Self {
            strategy: CompareStrategy::default(),
            include_added: true,
            max_reported_changes: 3,
        }
    }
}

impl ChangeReportConfig {
    /// Parse from TOML; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
