//! Property tests for phrase comparison and the closure cache.
//!
//! Phrases are drawn from the mini lexicon's vocabulary mixed with
//! stopwords and unknown words:
//!   - the verdict does not depend on phrase order
//!   - the lemma-pair cache never changes a verdict
//!   - a closure is the same on every lookup

use std::sync::{Arc, OnceLock};

use proptest::prelude::*;

use apriori_core::config::AprioriConfig;
use apriori_core::models::SenseId;
use apriori_core::traits::ILexicalResource;
use apriori_engine::AprioriEngine;
use apriori_lexicon::InMemoryLexicon;
use test_fixtures::{fixture_path, MINI_LEXICON};

const VOCABULARY: &[&str] = &[
    "the", "a", "is", "all", "are", "an", "dog", "Dogs", "puppies", "poodle", "cat", "cats",
    "animal", "bark", "barks", "purr", "sky", "skies", "blue", "black", "color", "bachelor",
    "bachelors", "bachelor's", "unmarried", "single", "geese", "goose", "whale", "mammal",
    "tree", "noise", "men", "man", "zzyzx", "loudly",
];

fn lexicon() -> Arc<InMemoryLexicon> {
    static LEXICON: OnceLock<Arc<InMemoryLexicon>> = OnceLock::new();
    Arc::clone(LEXICON.get_or_init(|| {
        Arc::new(InMemoryLexicon::load(fixture_path(MINI_LEXICON)).unwrap())
    }))
}

fn engine_with_pair_cache(capacity: u64) -> AprioriEngine {
    let mut config = AprioriConfig::default();
    config.engine.pair_cache_capacity = capacity;
    AprioriEngine::with_lexicon(lexicon(), &config)
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_verdict_is_symmetric(p1 in phrase(), p2 in phrase()) {
        let engine = engine_with_pair_cache(1_000);
        prop_assert_eq!(
            engine.is_analytical_a_priori(&p1, &p2),
            engine.is_analytical_a_priori(&p2, &p1),
            "{:?} / {:?}", p1, p2
        );
    }

    #[test]
    fn prop_pair_cache_is_transparent(p1 in phrase(), p2 in phrase()) {
        let cached = engine_with_pair_cache(1_000);
        let uncached = engine_with_pair_cache(0);
        // Twice, so the second cached call is served from the cache.
        let first = cached.compare(&p1, &p2);
        prop_assert_eq!(&first, &cached.compare(&p1, &p2));
        prop_assert_eq!(first, uncached.compare(&p1, &p2));
    }

    #[test]
    fn prop_stopwords_never_reach_the_lemmas(p in phrase()) {
        let engine = engine_with_pair_cache(0);
        for lemma in engine.normalize(&p) {
            prop_assert!(!["a", "an", "is", "the", "all", "are"].contains(&lemma.as_str()));
            prop_assert!(!lemma.is_empty());
        }
    }

    #[test]
    fn prop_closure_is_stable(index in 0usize..64) {
        let engine = engine_with_pair_cache(0);
        let senses = engine.resource().sense_count();
        let sense = SenseId::new((index % senses) as u32);
        let first = engine.closure(sense);
        let second = engine.closure(sense);
        prop_assert_eq!(&*first, &*second);
        prop_assert!(!first.contains(&sense));
    }
}
