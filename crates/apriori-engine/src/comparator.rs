//! PhraseComparator: normalizes two phrases and searches the cartesian
//! product of their lemmas for a related pair, stopping at the first one.

use apriori_core::models::{Evidence, SenseMatch, Verdict};
use moka::sync::Cache;
use tracing::debug;

use crate::normalizer::Normalizer;
use crate::relatedness::RelatednessChecker;

type PairCache = Cache<(String, String), Option<SenseMatch>>;

pub struct PhraseComparator {
    normalizer: Normalizer,
    checker: RelatednessChecker,
    /// Lemma pair → relation. Relatedness over a static ontology is pure,
    /// so cached answers never go stale.
    pair_cache: Option<PairCache>,
}

impl PhraseComparator {
    /// `pair_cache_capacity` of 0 disables the lemma-pair cache.
    pub fn new(normalizer: Normalizer, checker: RelatednessChecker, pair_cache_capacity: u64) -> Self {
        let pair_cache =
            (pair_cache_capacity > 0).then(|| Cache::builder().max_capacity(pair_cache_capacity).build());
        Self {
            normalizer,
            checker,
            pair_cache,
        }
    }

    pub fn is_analytical_a_priori(&self, phrase1: &str, phrase2: &str) -> bool {
        self.compare(phrase1, phrase2).analytical
    }

    /// Verdict with the first related lemma pair as evidence. Pairs are
    /// visited in phrase order, `phrase1`'s lemmas in the outer loop.
    pub fn compare(&self, phrase1: &str, phrase2: &str) -> Verdict {
        let _span = tracing::debug_span!("apriori.compare").entered();

        let left = self.normalizer.normalize(phrase1);
        let right = self.normalizer.normalize(phrase2);
        debug!(?left, ?right, "normalized phrases");

        let evidence = left.iter().find_map(|l1| {
            right.iter().find_map(|l2| {
                self.relation(l1, l2).map(|sense_match| Evidence {
                    left_lemma: l1.clone(),
                    right_lemma: l2.clone(),
                    sense_match,
                })
            })
        });

        match evidence {
            Some(evidence) => {
                debug!(
                    left = %evidence.left_lemma,
                    right = %evidence.right_lemma,
                    kind = ?evidence.sense_match.kind,
                    "phrases related"
                );
                Verdict::related(left, right, evidence)
            }
            None => {
                debug!("phrases unrelated");
                Verdict::unrelated(left, right)
            }
        }
    }

    fn relation(&self, lemma1: &str, lemma2: &str) -> Option<SenseMatch> {
        let Some(cache) = &self.pair_cache else {
            return self.checker.find_relation(lemma1, lemma2);
        };
        let key = (lemma1.to_string(), lemma2.to_string());
        if let Some(cached) = cache.get(&key) {
            return cached;
        }
        let found = self.checker.find_relation(lemma1, lemma2);
        cache.insert(key, found);
        found
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn checker(&self) -> &RelatednessChecker {
        &self.checker
    }

    /// Entries in the lemma-pair cache (0 when disabled). moka updates this
    /// count lazily.
    pub fn pair_cache_len(&self) -> u64 {
        self.pair_cache.as_ref().map_or(0, |c| c.entry_count())
    }
}
