use serde::{Deserialize, Serialize};

use super::defaults;

/// Lexical resource configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path to the JSON lexicon document.
    pub path: String,
    /// Run cycle detection over the hypernym graph at load time and warn.
    pub report_cycles: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_LEXICON_PATH.to_string(),
            report_cycles: defaults::DEFAULT_REPORT_CYCLES,
        }
    }
}
