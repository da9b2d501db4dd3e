use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::zone::DEFAULT_EDGE_MARGIN;

/// Settings for one resizable region
///
/// Loaded from a TOML file such as:
///
/// ```toml
/// edge_margin = 8
/// ```
///
/// Missing keys fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizerConfig {
    /// Width in pixels of the edge and corner hit band
    pub edge_margin: i32,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

/// Error types for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// True when the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl ResizerConfig {
    /// Smallest accepted edge margin
    pub const MIN_EDGE_MARGIN: i32 = 1;
    /// Largest accepted edge margin
    pub const MAX_EDGE_MARGIN: i32 = 64;

    /// Builds a config with the given edge margin, clamped into range
    pub fn with_edge_margin(edge_margin: i32) -> Self {
        let mut config = Self { edge_margin };
        config.validate();
        config
    }

    /// Parses a config from TOML text and validates it
    ///
    /// # Returns
    /// The validated config, or [`ConfigError::Toml`] if the text is not a
    /// valid config
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: ResizerConfig = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    /// Reads and parses a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Loads a config file, falling back to defaults
    ///
    /// A missing file silently yields defaults; any other failure is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => Self::default(),
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Clamps values into their supported ranges
    pub fn validate(&mut self) {
        let clamped = self
            .edge_margin
            .clamp(Self::MIN_EDGE_MARGIN, Self::MAX_EDGE_MARGIN);
        if clamped != self.edge_margin {
            tracing::warn!(
                requested = self.edge_margin,
                used = clamped,
                "edge_margin out of range"
            );
            self.edge_margin = clamped;
        }
    }
}
