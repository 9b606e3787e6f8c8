//! Phrase → lemmas: case fold, split on spaces, drop stopwords, lemmatize.

use std::collections::HashSet;
use std::sync::Arc;

use apriori_core::config::NormalizerConfig;
use apriori_core::constants::DEFAULT_STOPWORDS;
use apriori_core::traits::ILemmatizer;

/// Turns a raw phrase into the ordered lemmas the comparator works on.
///
/// Steps run in a fixed order:
/// 1. lowercase the whole phrase;
/// 2. split on single spaces;
/// 3. drop chunks that exactly equal a stopword;
/// 4. split surviving chunks on any other whitespace, dropping empty tokens;
/// 5. lemmatize each token on its own.
///
/// Because stopwords are matched in step 3, a stopword glued to a tab
/// (`"the\tcat"`) is kept.
pub struct Normalizer {
    stopwords: HashSet<String>,
    lemmatizer: Arc<dyn ILemmatizer>,
}

impl Normalizer {
    /// Normalizer with the default stopword set.
    pub fn new(lemmatizer: Arc<dyn ILemmatizer>) -> Self {
        Self::with_stopwords(lemmatizer, DEFAULT_STOPWORDS)
    }

    pub fn from_config(lemmatizer: Arc<dyn ILemmatizer>, config: &NormalizerConfig) -> Self {
        Self::with_stopwords(lemmatizer, &config.stopwords)
    }

    /// Stopwords are lowercased here so matching after case folding stays exact.
    pub fn with_stopwords<I, S>(lemmatizer: Arc<dyn ILemmatizer>, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            lemmatizer,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Content tokens before lemmatization (steps 1 to 4).
    pub fn tokens(&self, phrase: &str) -> Vec<String> {
        phrase
            .to_lowercase()
            .split(' ')
            .filter(|chunk| !self.is_stopword(chunk))
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect()
    }

    /// Ordered lemmas of the phrase. Duplicates are kept; empty when every
    /// word is a stopword.
    pub fn normalize(&self, phrase: &str) -> Vec<String> {
        self.tokens(phrase)
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect()
    }
}
