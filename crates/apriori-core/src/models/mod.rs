mod phrase;
mod sense;
mod verdict;

pub use phrase::PhrasePair;
pub use sense::{PartOfSpeech, SenseId};
pub use verdict::{Evidence, RelationKind, SenseMatch, Verdict};
