//! # apriori-lexicon
//!
//! The lexical resource behind relatedness queries. Loads a WordNet-shaped
//! JSON document into a `petgraph` hypernym graph, resolves inflected words
//! to senses with WordNet's morphy rules, and provides the noun-default
//! lemmatizer used by the normalizer.

pub mod document;
pub mod graph;
pub mod lemmatizer;
pub mod lexicon;
pub mod morphy;

pub use document::{LexiconDocument, SynsetRecord};
pub use graph::{SynsetGraph, SynsetNode};
pub use lemmatizer::MorphyLemmatizer;
pub use lexicon::InMemoryLexicon;
pub use morphy::Morphy;
