use serde::{Deserialize, Serialize};

use crate::constants::PHRASE_DELIMITER;
use crate::errors::{InputError, PhrasePosition};

/// Two trimmed, non-empty phrases to compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasePair {
    pub first: String,
    pub second: String,
}

impl PhrasePair {
    /// Build a pair from two separate fields.
    pub fn new(first: &str, second: &str) -> Result<Self, InputError> {
        let first = first.trim();
        let second = second.trim();
        if first.is_empty() {
            return Err(InputError::EmptyPhrase {
                position: PhrasePosition::First,
            });
        }
        if second.is_empty() {
            return Err(InputError::EmptyPhrase {
                position: PhrasePosition::Second,
            });
        }
        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Split a single line on its first comma.
    ///
    /// Later commas belong to the second phrase.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.split_once(PHRASE_DELIMITER) {
            Some((first, second)) => Self::new(first, second),
            None => Err(InputError::MissingDelimiter {
                delimiter: PHRASE_DELIMITER,
            }),
        }
    }
}

impl std::str::FromStr for PhrasePair {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
