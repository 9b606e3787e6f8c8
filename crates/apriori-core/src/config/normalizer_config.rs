use serde::{Deserialize, Serialize};

use super::defaults;

/// Normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Words removed from a phrase after case folding. Compared exactly.
    pub stopwords: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stopwords: defaults::DEFAULT_STOPWORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}
