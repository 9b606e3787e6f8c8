//! petgraph::DiGraph wrapper with SynsetNode weights. Edges point from a
//! hyponym to its hypernym.

use std::collections::HashMap;

use apriori_core::models::{PartOfSpeech, SenseId};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// A node in the hypernym graph, representing one synset.
#[derive(Debug, Clone)]
pub struct SynsetNode {
    /// Synset identifier, e.g. `dog.n.01`.
    pub id: String,
    pub pos: PartOfSpeech,
    /// Member lemmas in document order, lowercased.
    pub lemmas: Vec<String>,
    pub definition: String,
}

/// The underlying directed graph type.
pub type HypernymGraph = DiGraph<SynsetNode, ()>;

/// Hypernym graph with O(1) lookup by synset id.
#[derive(Debug, Default)]
pub struct SynsetGraph {
    graph: HypernymGraph,
    /// Map from synset id → NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl SynsetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a synset node. Returns `None` if the id is already taken.
    pub fn add_synset(&mut self, node: SynsetNode) -> Option<SenseId> {
        if self.node_index.contains_key(&node.id) {
            return None;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        Some(to_sense(idx))
    }

    /// Record that `hypernym` is a direct hypernym of `sense`. Repeated edges collapse.
    pub fn add_hypernym(&mut self, sense: SenseId, hypernym: SenseId) {
        self.graph.update_edge(to_node(sense), to_node(hypernym), ());
    }

    pub fn get(&self, id: &str) -> Option<SenseId> {
        self.node_index.get(id).copied().map(to_sense)
    }

    pub fn node(&self, sense: SenseId) -> Option<&SynsetNode> {
        self.graph.node_weight(to_node(sense))
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Direct hypernyms in the order they were added.
    pub fn hypernyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.neighbors(sense, Direction::Outgoing)
    }

    /// Direct hyponyms in the order they were added.
    pub fn hyponyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.neighbors(sense, Direction::Incoming)
    }

    fn neighbors(&self, sense: SenseId, direction: Direction) -> Vec<SenseId> {
        if sense.index() >= self.graph.node_count() {
            return Vec::new();
        }
        // petgraph walks adjacency lists newest-first.
        let mut out: Vec<SenseId> = self
            .graph
            .neighbors_directed(to_node(sense), direction)
            .map(to_sense)
            .collect();
        out.reverse();
        out
    }

    /// Groups of synsets that reach each other through hypernym edges.
    /// Empty for a well-formed ontology.
    pub fn find_cycles(&self) -> Vec<Vec<SenseId>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| scc.into_iter().map(to_sense).collect())
            .collect()
    }
}

fn to_node(sense: SenseId) -> NodeIndex {
    NodeIndex::new(sense.index())
}

fn to_sense(idx: NodeIndex) -> SenseId {
    SenseId::new(idx.index() as u32)
}
