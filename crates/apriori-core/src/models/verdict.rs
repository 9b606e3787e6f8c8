use serde::{Deserialize, Serialize};

use super::SenseId;

/// How the left sense of a match relates to the right sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Both words share this exact sense.
    Synonym,
    /// Left is a direct hypernym of right.
    Hypernym,
    /// Left is a direct hyponym of right.
    Hyponym,
    /// Left is an ancestor of right through two or more hypernym edges.
    TransitiveHypernym,
    /// Left descends from right through two or more hypernym edges.
    TransitiveHyponym,
}

impl RelationKind {
    /// Label matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Synonym => "synonym",
            Self::Hypernym => "hypernym",
            Self::Hyponym => "hyponym",
            Self::TransitiveHypernym => "transitive_hypernym",
            Self::TransitiveHyponym => "transitive_hyponym",
        }
    }

    /// The same relation seen from the other side.
    pub fn inverse(self) -> Self {
        match self {
            Self::Synonym => Self::Synonym,
            Self::Hypernym => Self::Hyponym,
            Self::Hyponym => Self::Hypernym,
            Self::TransitiveHypernym => Self::TransitiveHyponym,
            Self::TransitiveHyponym => Self::TransitiveHypernym,
        }
    }
}

/// A pair of senses that settled a relatedness query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseMatch {
    pub left: SenseId,
    pub right: SenseId,
    pub kind: RelationKind,
}

/// The lemma pair and sense pair behind a positive verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub left_lemma: String,
    pub right_lemma: String,
    pub sense_match: SenseMatch,
}

/// Outcome of comparing two phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub analytical: bool,
    pub left_lemmas: Vec<String>,
    pub right_lemmas: Vec<String>,
    /// First matching pair in lemma order. `None` iff `analytical` is false.
    pub evidence: Option<Evidence>,
}

impl Verdict {
    pub fn unrelated(left_lemmas: Vec<String>, right_lemmas: Vec<String>) -> Self {
        Self {
            analytical: false,
            left_lemmas,
            right_lemmas,
            evidence: None,
        }
    }

    pub fn related(left_lemmas: Vec<String>, right_lemmas: Vec<String>, evidence: Evidence) -> Self {
        Self {
            analytical: true,
            left_lemmas,
            right_lemmas,
            evidence: Some(evidence),
        }
    }
}
