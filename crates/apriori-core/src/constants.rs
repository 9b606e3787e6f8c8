/// apriori version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Words dropped by the normalizer before lemmatization.
pub const DEFAULT_STOPWORDS: [&str; 6] = ["a", "an", "is", "the", "all", "are"];

/// Delimiter between the two phrases of a single-line input.
pub const PHRASE_DELIMITER: char = ',';

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "APRIORI_LOG";
