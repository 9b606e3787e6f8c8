//! Golden phrase pairs from test-fixtures, run against the mini lexicon.

use std::sync::Arc;

use apriori_core::config::AprioriConfig;
use apriori_engine::AprioriEngine;
use apriori_lexicon::InMemoryLexicon;
use test_fixtures::{fixture_path, golden_phrase_pairs, MINI_LEXICON};

#[test]
fn golden_phrase_pairs_match() {
    let lexicon = Arc::new(InMemoryLexicon::load(fixture_path(MINI_LEXICON)).unwrap());
    let engine = AprioriEngine::with_lexicon(lexicon, &AprioriConfig::default());

    let cases = golden_phrase_pairs();
    assert!(cases.len() >= 10);

    for case in cases {
        let verdict = engine.compare(&case.first, &case.second);
        assert_eq!(verdict.analytical, case.analytical, "case {}", case.name);

        let found = verdict
            .evidence
            .map(|e| (e.left_lemma, e.right_lemma));
        assert_eq!(found, case.evidence, "evidence for case {}", case.name);
    }
}

#[test]
fn golden_verdicts_are_symmetric() {
    let lexicon = Arc::new(InMemoryLexicon::load(fixture_path(MINI_LEXICON)).unwrap());
    let engine = AprioriEngine::with_lexicon(lexicon, &AprioriConfig::default());

    for case in golden_phrase_pairs() {
        assert_eq!(
            engine.is_analytical_a_priori(&case.second, &case.first),
            case.analytical,
            "reversed case {}",
            case.name
        );
    }
}
