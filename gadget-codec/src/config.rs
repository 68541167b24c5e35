//! Codec configuration, optionally read from a TOML file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

fn default_max_depth() -> usize {
    64
}

/// Tunables for [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Deepest nested gadget accepted by decode and encode. The root gadget
    /// is depth 0.
    pub max_depth: usize,
    /// Turns scalar type mismatches into hard decode failures.
    pub strict_scalars: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            strict_scalars: false,
        }
    }
}

impl CodecConfig {
    /// Parses a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded codec config from {:?}", path);
        Ok(config)
    }

    /// Loads a config file from a default location, falling back to the
    /// defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No codec config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
