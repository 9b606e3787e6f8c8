//! # apriori-core
//!
//! Foundation crate for the apriori relatedness engine.
//! Defines the sense and verdict types, the lexical resource and lemmatizer
//! traits, errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AprioriConfig;
pub use errors::{AprioriError, AprioriResult};
pub use models::{PartOfSpeech, PhrasePair, RelationKind, SenseId, SenseMatch, Verdict};
pub use traits::{ILemmatizer, ILexicalResource};
