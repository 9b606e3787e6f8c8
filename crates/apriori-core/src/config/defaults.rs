// Single source of truth for all default values.

// --- Lexicon ---
pub const DEFAULT_LEXICON_PATH: &str = "lexicon.json";
pub const DEFAULT_REPORT_CYCLES: bool = true;

// --- Normalizer ---
pub use crate::constants::DEFAULT_STOPWORDS;

// --- Engine ---
pub const DEFAULT_PAIR_CACHE_CAPACITY: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
