use apriori_core::errors::{InputError, PhrasePosition};
use apriori_core::models::*;
use proptest::prelude::*;

#[test]
fn phrase_pair_splits_on_first_comma_and_trims() {
    let pair = PhrasePair::parse("Bachelors are unmarried, All bachelors are single").unwrap();
    assert_eq!(pair.first, "Bachelors are unmarried");
    assert_eq!(pair.second, "All bachelors are single");
}

#[test]
fn later_commas_stay_in_second_phrase() {
    let pair = PhrasePair::parse("dogs, cats, and birds").unwrap();
    assert_eq!(pair.first, "dogs");
    assert_eq!(pair.second, "cats, and birds");
}

#[test]
fn missing_comma_is_rejected() {
    assert_eq!(
        PhrasePair::parse("no delimiter here"),
        Err(InputError::MissingDelimiter { delimiter: ',' })
    );
}

#[test]
fn blank_sides_are_rejected() {
    assert_eq!(
        PhrasePair::parse("   , dogs"),
        Err(InputError::EmptyPhrase {
            position: PhrasePosition::First
        })
    );
    assert_eq!(
        PhrasePair::parse("dogs,   "),
        Err(InputError::EmptyPhrase {
            position: PhrasePosition::Second
        })
    );
}

#[test]
fn phrase_pair_from_str() {
    let pair: PhrasePair = "a,b".parse().unwrap();
    assert_eq!(pair, PhrasePair::new("a", "b").unwrap());
}

#[test]
fn pos_tags_roundtrip() {
    for pos in PartOfSpeech::ALL {
        assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
    }
    assert_eq!(PartOfSpeech::from_tag("x"), None);
}

#[test]
fn pos_serializes_as_wordnet_tag() {
    let json = serde_json::to_string(&PartOfSpeech::AdjectiveSatellite).unwrap();
    assert_eq!(json, "\"s\"");
}

#[test]
fn relation_inverse_is_an_involution() {
    for kind in [
        RelationKind::Synonym,
        RelationKind::Hypernym,
        RelationKind::Hyponym,
        RelationKind::TransitiveHypernym,
        RelationKind::TransitiveHyponym,
    ] {
        assert_eq!(kind.inverse().inverse(), kind);
    }
    assert_eq!(RelationKind::Hypernym.inverse(), RelationKind::Hyponym);
}

#[test]
fn relation_label_matches_serde() {
    for kind in [RelationKind::Synonym, RelationKind::TransitiveHyponym] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}

#[test]
fn unrelated_verdict_has_no_evidence() {
    let verdict = Verdict::unrelated(vec!["sky".into()], vec!["dog".into()]);
    assert!(!verdict.analytical);
    assert!(verdict.evidence.is_none());
}

proptest! {
    #[test]
    fn parsed_phrases_are_trimmed_and_non_empty(a in "[a-z ]{0,20}", b in "[a-z ,]{0,20}") {
        let input = format!("{a},{b}");
        if let Ok(pair) = PhrasePair::parse(&input) {
            prop_assert!(!pair.first.is_empty());
            prop_assert!(!pair.second.is_empty());
            prop_assert_eq!(pair.first.trim(), pair.first.as_str());
            prop_assert_eq!(pair.second.trim(), pair.second.as_str());
        }
    }
}
