use serde::{Deserialize, Serialize};

use super::defaults;

/// Comparison engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max lemma pairs whose relatedness verdict is memoized. 0 disables the cache.
    pub pair_cache_capacity: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pair_cache_capacity: defaults::DEFAULT_PAIR_CACHE_CAPACITY,
        }
    }
}
