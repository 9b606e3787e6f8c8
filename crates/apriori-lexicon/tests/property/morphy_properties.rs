//! Property tests for morphy and the lemmatizer.
//!
//!   - every base form is one the lexicon accepts
//!   - base forms are unique
//!   - lemmatizing is deterministic and idempotent on known noun lemmas

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use proptest::prelude::*;

use apriori_core::models::PartOfSpeech;
use apriori_core::traits::ILemmatizer;
use apriori_lexicon::{InMemoryLexicon, Morphy, MorphyLemmatizer};
use test_fixtures::{fixture_path, MINI_LEXICON};

const KNOWN: &[&str] = &["box", "church", "wife", "man", "city", "bus", "make", "fine", "hop"];

fn lexicon() -> Arc<InMemoryLexicon> {
    static LEXICON: OnceLock<Arc<InMemoryLexicon>> = OnceLock::new();
    Arc::clone(LEXICON.get_or_init(|| {
        Arc::new(InMemoryLexicon::load(fixture_path(MINI_LEXICON)).unwrap())
    }))
}

fn any_pos() -> impl Strategy<Value = PartOfSpeech> {
    prop::sample::select(PartOfSpeech::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_base_forms_are_accepted_and_unique(
        word in "[a-z]{0,12}(s|es|ies|ves|men|ed|ing|er|est)?",
        pos in any_pos(),
    ) {
        let known: HashSet<&str> = KNOWN.iter().copied().collect();
        let forms = Morphy::new().base_forms(&word, pos, |f| known.contains(f));
        let unique: HashSet<&String> = forms.iter().collect();
        prop_assert_eq!(unique.len(), forms.len());
        for form in &forms {
            prop_assert!(known.contains(form.as_str()), "{} from {}", form, word);
        }
    }

    #[test]
    fn prop_base_forms_never_grow_the_word(word in "[a-z]{1,16}", pos in any_pos()) {
        let forms = Morphy::new().base_forms(&word, pos, |_| true);
        for form in forms {
            prop_assert!(form.len() <= word.len(), "{} from {}", form, word);
        }
    }

    #[test]
    fn prop_lemmatize_is_deterministic(word in "[a-z']{1,12}") {
        let lemmatizer = MorphyLemmatizer::new(lexicon());
        prop_assert_eq!(lemmatizer.lemmatize(&word), lemmatizer.lemmatize(&word));
    }

    #[test]
    fn prop_lemmatize_fixes_known_nouns(
        lemma in prop::sample::select(vec![
            "dog", "puppy", "goose", "man", "bachelor", "sky", "bark", "color", "whale", "mammal",
        ]),
    ) {
        let lemmatizer = MorphyLemmatizer::new(lexicon());
        prop_assert_eq!(lemmatizer.lemmatize(lemma), lemma);
        let once = lemmatizer.lemmatize(&format!("{lemma}s"));
        prop_assert_eq!(lemmatizer.lemmatize(&once), once.clone());
    }
}
