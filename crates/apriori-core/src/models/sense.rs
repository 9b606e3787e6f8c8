use serde::{Deserialize, Serialize};

/// Opaque handle to one sense (synset) of the lexical resource.
///
/// Only meaningful for the resource that issued it. Compared by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SenseId(u32);

impl SenseId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// WordNet part of speech, serialized as the one-letter synset tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order used when a word is resolved without a part of speech.
    pub const ALL: [PartOfSpeech; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::AdjectiveSatellite,
        Self::Adverb,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "a",
            Self::AdjectiveSatellite => "s",
            Self::Adverb => "r",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" => Some(Self::Adjective),
            "s" => Some(Self::AdjectiveSatellite),
            "r" => Some(Self::Adverb),
            _ => None,
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
