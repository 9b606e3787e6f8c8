//! Serialized lexicon format.

use std::collections::BTreeMap;

use apriori_core::errors::LexiconError;
use apriori_core::models::PartOfSpeech;
use serde::{Deserialize, Serialize};

/// A whole lexicon: synsets plus per-part-of-speech irregular inflections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub synsets: Vec<SynsetRecord>,
    /// Part-of-speech tag → inflected form → base forms, e.g. `n: geese → [goose]`.
    #[serde(default)]
    pub exceptions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

/// One synset as written in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    /// Ids of the direct hypernyms. Must refer to synsets in the same document.
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default)]
    pub definition: String,
}

impl LexiconDocument {
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        serde_json::from_str(json).map_err(|e| LexiconError::Parse {
            reason: e.to_string(),
        })
    }

    /// Exception tables keyed by part of speech. Unknown tags are a parse error.
    pub fn exception_tables(
        &self,
    ) -> Result<Vec<(PartOfSpeech, &BTreeMap<String, Vec<String>>)>, LexiconError> {
        self.exceptions
            .iter()
            .map(|(tag, table)| {
                PartOfSpeech::from_tag(tag)
                    .map(|pos| (pos, table))
                    .ok_or_else(|| LexiconError::Parse {
                        reason: format!("unknown part of speech '{tag}' in exceptions"),
                    })
            })
            .collect()
    }
}
