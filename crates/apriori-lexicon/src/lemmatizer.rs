//! Noun-default lemmatizer backed by the lexicon's morphy.

use std::sync::Arc;

use apriori_core::models::PartOfSpeech;
use apriori_core::traits::ILemmatizer;

use crate::lexicon::InMemoryLexicon;

/// Reduces every word as if it were a noun. The shortest known base form
/// wins; a word with no known noun form is returned unchanged.
#[derive(Debug, Clone)]
pub struct MorphyLemmatizer {
    lexicon: Arc<InMemoryLexicon>,
}

impl MorphyLemmatizer {
    pub fn new(lexicon: Arc<InMemoryLexicon>) -> Self {
        Self { lexicon }
    }
}

impl ILemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let forms = self.lexicon.morphy(word, PartOfSpeech::Noun);
        // min_by_key keeps the first of equally short forms.
        forms
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}
