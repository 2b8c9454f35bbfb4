//! Core configuration loaded from TOML.
//!
//! # Invariants
//! - Missing keys take defaults; unknown keys are rejected.
//! - A loaded config always has a supported log level and `recent_limit >= 1`.

use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_RECENT_LIMIT: usize = 4;

/// Configuration load or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files; file logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// Number of deliveries shown in the dashboard "recent" list.
    pub recent_limit: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl CoreConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if self.recent_limit == 0 {
            return Err(ConfigError::Invalid(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
