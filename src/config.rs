//! Configuration loading for casemap.
//!
//! Configuration lives in `.casemap.toml`. Every field has a default, so a
//! missing file or a partial file both work; an explicitly requested file
//! that cannot be read or parsed is an error.

use crate::scoring::EvidenceWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".casemap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CasemapConfig {
    /// Weights for combining reliability and relevance into a strength score.
    #[serde(default)]
    pub scoring: EvidenceWeights,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format when --format is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl CasemapConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `.casemap.toml` in the working directory is used when present,
    /// otherwise defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    Self::default()
                }
            }
        };

        config
            .scoring
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid scoring configuration")?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
