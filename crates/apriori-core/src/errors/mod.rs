mod input_error;
mod lexicon_error;

pub use input_error::{InputError, PhrasePosition};
pub use lexicon_error::LexiconError;

/// Top-level error type. Subsystem errors fold into it via `From`.
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("tracing init failed: {0}")]
    TracingInit(String),
}

pub type AprioriResult<T> = Result<T, AprioriError>;
