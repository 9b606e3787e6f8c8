use apriori_core::errors::*;

#[test]
fn lexicon_io_error_carries_path() {
    let err = LexiconError::Io {
        path: "/data/wordnet.json".into(),
        message: "No such file or directory".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/data/wordnet.json"));
    assert!(msg.contains("No such file"));
}

#[test]
fn dangling_hypernym_carries_both_ids() {
    let err = LexiconError::DanglingHypernym {
        synset: "dog.n.01".into(),
        target: "canine.n.99".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("dog.n.01"));
    assert!(msg.contains("canine.n.99"));
}

#[test]
fn duplicate_synset_carries_id() {
    let err = LexiconError::DuplicateSynset {
        id: "cat.n.01".into(),
    };
    assert!(err.to_string().contains("cat.n.01"));
}

#[test]
fn empty_phrase_names_position() {
    let err = InputError::EmptyPhrase {
        position: PhrasePosition::Second,
    };
    assert_eq!(err.to_string(), "second phrase is empty");
}

#[test]
fn missing_delimiter_names_delimiter() {
    let err = InputError::MissingDelimiter { delimiter: ',' };
    assert!(err.to_string().contains("','"));
}

// --- From impls ---

#[test]
fn lexicon_error_converts_to_apriori_error() {
    let err: AprioriError = LexiconError::Parse {
        reason: "expected value".into(),
    }
    .into();
    assert!(matches!(err, AprioriError::Lexicon(_)));
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn input_error_converts_to_apriori_error() {
    let err: AprioriError = InputError::MissingDelimiter { delimiter: ',' }.into();
    assert!(matches!(err, AprioriError::Input(_)));
}

#[test]
fn result_alias_propagates_with_question_mark() {
    fn inner() -> AprioriResult<()> {
        Err(InputError::EmptyPhrase {
            position: PhrasePosition::First,
        })?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(err.to_string().contains("first phrase is empty"));
}
