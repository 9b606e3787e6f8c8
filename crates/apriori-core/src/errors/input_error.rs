/// Caller input errors, raised before the engine is consulted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two phrases separated by '{delimiter}'")]
    MissingDelimiter { delimiter: char },

    #[error("{position} phrase is empty")]
    EmptyPhrase { position: PhrasePosition },
}

/// Which side of a phrase pair an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhrasePosition {
    First,
    Second,
}

impl std::fmt::Display for PhrasePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}
