//! Layered configuration: every section defaults independently, so a partial
//! TOML file only overrides what it names.

pub mod defaults;
mod engine_config;
mod lexicon_config;
mod normalizer_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use engine_config::EngineConfig;
pub use lexicon_config::LexiconConfig;
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{AprioriError, AprioriResult};

/// Top-level configuration for the apriori engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AprioriConfig {
    pub lexicon: LexiconConfig,
    pub normalizer: NormalizerConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl AprioriConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> AprioriResult<Self> {
        toml::from_str(toml_str).map_err(|e| AprioriError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AprioriResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AprioriError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }
}
