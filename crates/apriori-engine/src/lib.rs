//! # apriori-engine
//!
//! Decides whether two phrases are analytically related: some content word
//! of one is a synonym, hypernym, or hyponym (direct or transitive) of some
//! content word of the other.
//!
//! Phrase → [`Normalizer`] → lemmas → [`PhraseComparator`] →
//! [`RelatednessChecker`] → [`HypernymClosureCache`] ↔ lexical resource.

pub mod closure;
pub mod comparator;
pub mod engine;
pub mod normalizer;
pub mod relatedness;
pub mod tracing_setup;

pub use closure::{ClosureCacheStats, HypernymClosureCache};
pub use comparator::PhraseComparator;
pub use engine::AprioriEngine;
pub use normalizer::Normalizer;
pub use relatedness::RelatednessChecker;
