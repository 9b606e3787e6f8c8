//! InMemoryLexicon: implements ILexicalResource over a SynsetGraph plus a
//! lemma index, with morphy-based lookup of inflected words.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use apriori_core::config::LexiconConfig;
use apriori_core::errors::{AprioriResult, LexiconError};
use apriori_core::models::{PartOfSpeech, SenseId};
use apriori_core::traits::ILexicalResource;
use tracing::{info, warn};

use crate::document::LexiconDocument;
use crate::graph::{SynsetGraph, SynsetNode};
use crate::morphy::Morphy;

/// A fully loaded, immutable lexical resource.
#[derive(Debug)]
pub struct InMemoryLexicon {
    graph: SynsetGraph,
    /// Lemma → part of speech → senses, in document order.
    lemma_index: HashMap<String, HashMap<PartOfSpeech, Vec<SenseId>>>,
    morphy: Morphy,
}

impl InMemoryLexicon {
    /// Load from a JSON lexicon file, as configured.
    pub fn from_config(config: &LexiconConfig) -> AprioriResult<Self> {
        Self::load_with(&config.path, config.report_cycles)
    }

    /// Load from a JSON lexicon file, reporting hypernym cycles.
    pub fn load(path: impl AsRef<Path>) -> AprioriResult<Self> {
        Self::load_with(path, true)
    }

    fn load_with(path: impl AsRef<Path>, report_cycles: bool) -> AprioriResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let document = LexiconDocument::from_json_str(&json)?;
        let lexicon = Self::build(document, report_cycles)?;
        info!(
            path = %path.display(),
            synsets = lexicon.graph.len(),
            lemmas = lexicon.lemma_index.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn from_json_str(json: &str) -> AprioriResult<Self> {
        let document = LexiconDocument::from_json_str(json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: LexiconDocument) -> AprioriResult<Self> {
        Ok(Self::build(document, true)?)
    }

    fn build(document: LexiconDocument, report_cycles: bool) -> Result<Self, LexiconError> {
        let mut morphy = Morphy::new();
        for (pos, table) in document.exception_tables()? {
            for (inflected, bases) in table {
                morphy.add_exception(pos, inflected, bases);
            }
        }

        let mut graph = SynsetGraph::new();
        let mut lemma_index: HashMap<String, HashMap<PartOfSpeech, Vec<SenseId>>> =
            HashMap::new();

        // Pass 1: nodes and lemmas.
        for record in &document.synsets {
            if record.lemmas.is_empty() {
                return Err(LexiconError::InvalidSynset {
                    id: record.id.clone(),
                    reason: "no lemmas".to_string(),
                });
            }
            let lemmas: Vec<String> = record
                .lemmas
                .iter()
                .map(|l| normalize_word(l))
                .collect();
            let node = SynsetNode {
                id: record.id.clone(),
                pos: record.pos,
                lemmas: lemmas.clone(),
                definition: record.definition.clone(),
            };
            let sense = graph
                .add_synset(node)
                .ok_or_else(|| LexiconError::DuplicateSynset {
                    id: record.id.clone(),
                })?;
            for lemma in lemmas {
                let senses = lemma_index.entry(lemma).or_default().entry(record.pos).or_default();
                if !senses.contains(&sense) {
                    senses.push(sense);
                }
            }
        }

        // Pass 2: hypernym edges, now that every id resolves.
        for record in &document.synsets {
            let Some(sense) = graph.get(&record.id) else {
                continue;
            };
            for target in &record.hypernyms {
                let hypernym = graph.get(target).ok_or_else(|| LexiconError::DanglingHypernym {
                    synset: record.id.clone(),
                    target: target.clone(),
                })?;
                graph.add_hypernym(sense, hypernym);
            }
        }

        let lexicon = Self {
            graph,
            lemma_index,
            morphy,
        };
        if report_cycles {
            lexicon.report_cycles();
        }
        Ok(lexicon)
    }

    fn report_cycles(&self) {
        for cycle in self.graph.find_cycles() {
            let members: Vec<&str> = cycle
                .iter()
                .filter_map(|s| self.graph.node(*s).map(|n| n.id.as_str()))
                .collect();
            warn!(members = %members.join(" -> "), "hypernym cycle in lexicon");
        }
    }

    /// Whether `lemma` names at least one sense with part of speech `pos`.
    pub fn has_lemma(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.lemma_index
            .get(lemma)
            .is_some_and(|by_pos| by_pos.contains_key(&pos))
    }

    /// Senses whose member list contains exactly `lemma` with part of speech `pos`.
    pub fn lemma_senses(&self, lemma: &str, pos: PartOfSpeech) -> &[SenseId] {
        self.lemma_index
            .get(lemma)
            .and_then(|by_pos| by_pos.get(&pos))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Base forms of `word` that exist in this lexicon for `pos`.
    pub fn morphy(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        self.morphy
            .base_forms(word, pos, |form| self.has_lemma(form, pos))
    }

    pub fn synset(&self, id: &str) -> Option<SenseId> {
        self.graph.get(id)
    }

    pub fn node(&self, sense: SenseId) -> Option<&SynsetNode> {
        self.graph.node(sense)
    }

    pub fn lemma_count(&self) -> usize {
        self.lemma_index.len()
    }
}

impl ILexicalResource for InMemoryLexicon {
    fn senses_of(&self, word: &str) -> Vec<SenseId> {
        let word = normalize_word(word);
        let mut seen = HashSet::new();
        let mut senses = Vec::new();
        for pos in PartOfSpeech::ALL {
            for form in self.morphy(&word, pos) {
                for &sense in self.lemma_senses(&form, pos) {
                    if seen.insert(sense) {
                        senses.push(sense);
                    }
                }
            }
        }
        senses
    }

    fn direct_hypernyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.graph.hypernyms(sense)
    }

    fn direct_hyponyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.graph.hyponyms(sense)
    }

    fn sense_name(&self, sense: SenseId) -> Option<String> {
        self.graph.node(sense).map(|n| n.id.clone())
    }

    fn sense_count(&self) -> usize {
        self.graph.len()
    }
}

/// Lemmas are stored lowercased with underscores for spaces.
fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}
