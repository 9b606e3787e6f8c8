/// Lexical resource loading errors. All of them are fatal at start-up.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed lexicon document: {reason}")]
    Parse { reason: String },

    #[error("duplicate synset id: {id}")]
    DuplicateSynset { id: String },

    #[error("synset {synset} names unknown hypernym {target}")]
    DanglingHypernym { synset: String, target: String },

    #[error("invalid synset {id}: {reason}")]
    InvalidSynset { id: String, reason: String },
}
