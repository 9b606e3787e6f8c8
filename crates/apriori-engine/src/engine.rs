//! AprioriEngine: owns the lexical resource, lemmatizer, closure cache and
//! comparator, and is the single entry point callers hold on to.

use std::sync::Arc;

use apriori_core::config::AprioriConfig;
use apriori_core::errors::AprioriResult;
use apriori_core::models::{PhrasePair, SenseId, SenseMatch, Verdict};
use apriori_core::traits::{ILemmatizer, ILexicalResource};
use apriori_lexicon::{InMemoryLexicon, MorphyLemmatizer};
use tracing::info;

use crate::closure::{AncestorSet, ClosureCacheStats, HypernymClosureCache};
use crate::comparator::PhraseComparator;
use crate::normalizer::Normalizer;
use crate::relatedness::RelatednessChecker;

/// Relatedness engine. `Send + Sync`; share it behind an `Arc` to serve
/// concurrent requests. The closure cache lives exactly as long as the engine.
pub struct AprioriEngine {
    resource: Arc<dyn ILexicalResource>,
    closures: Arc<HypernymClosureCache>,
    comparator: PhraseComparator,
}

impl AprioriEngine {
    /// Build from injected collaborators.
    pub fn new(
        resource: Arc<dyn ILexicalResource>,
        lemmatizer: Arc<dyn ILemmatizer>,
        config: &AprioriConfig,
    ) -> Self {
        let closures = Arc::new(HypernymClosureCache::new());
        let normalizer = Normalizer::from_config(lemmatizer, &config.normalizer);
        let checker = RelatednessChecker::new(Arc::clone(&resource), Arc::clone(&closures));
        let comparator =
            PhraseComparator::new(normalizer, checker, config.engine.pair_cache_capacity);

        info!(
            senses = resource.sense_count(),
            stopwords = config.normalizer.stopwords.len(),
            pair_cache_capacity = config.engine.pair_cache_capacity,
            "apriori engine ready"
        );

        Self {
            resource,
            closures,
            comparator,
        }
    }

    /// Build over an already loaded lexicon with its morphy lemmatizer.
    pub fn with_lexicon(lexicon: Arc<InMemoryLexicon>, config: &AprioriConfig) -> Self {
        let lemmatizer = Arc::new(MorphyLemmatizer::new(Arc::clone(&lexicon)));
        Self::new(lexicon, lemmatizer, config)
    }

    /// Load the configured lexicon file and build the engine.
    /// A lexicon that cannot be loaded is fatal.
    pub fn from_config(config: &AprioriConfig) -> AprioriResult<Self> {
        let lexicon = Arc::new(InMemoryLexicon::from_config(&config.lexicon)?);
        Ok(Self::with_lexicon(lexicon, config))
    }

    pub fn is_analytical_a_priori(&self, phrase1: &str, phrase2: &str) -> bool {
        self.comparator.is_analytical_a_priori(phrase1, phrase2)
    }

    pub fn compare(&self, phrase1: &str, phrase2: &str) -> Verdict {
        self.comparator.compare(phrase1, phrase2)
    }

    pub fn compare_pair(&self, pair: &PhrasePair) -> Verdict {
        self.compare(&pair.first, &pair.second)
    }

    /// Parse `"phrase one, phrase two"` and compare the halves.
    pub fn check_input(&self, line: &str) -> AprioriResult<Verdict> {
        let pair = PhrasePair::parse(line)?;
        Ok(self.compare_pair(&pair))
    }

    pub fn are_related(&self, word1: &str, word2: &str) -> bool {
        self.comparator.checker().are_related(word1, word2)
    }

    pub fn find_relation(&self, word1: &str, word2: &str) -> Option<SenseMatch> {
        self.comparator.checker().find_relation(word1, word2)
    }

    pub fn normalize(&self, phrase: &str) -> Vec<String> {
        self.comparator.normalizer().normalize(phrase)
    }

    pub fn closure(&self, sense: SenseId) -> AncestorSet {
        self.closures.closure(self.resource.as_ref(), sense)
    }

    pub fn closure_stats(&self) -> ClosureCacheStats {
        self.closures.stats()
    }

    pub fn resource(&self) -> &Arc<dyn ILexicalResource> {
        &self.resource
    }

    /// `"dog.n.01 hyponym canine.n.02"`-style rendering of a match.
    pub fn describe(&self, sense_match: &SenseMatch) -> String {
        let name = |s: SenseId| {
            self.resource
                .sense_name(s)
                .unwrap_or_else(|| format!("#{}", s.raw()))
        };
        format!(
            "{} {} {}",
            name(sense_match.left),
            sense_match.kind.as_str(),
            name(sense_match.right)
        )
    }
}
