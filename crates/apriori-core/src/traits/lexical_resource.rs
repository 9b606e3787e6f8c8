use crate::models::SenseId;

/// Read-only lexical ontology: words, senses, and the hypernym relation.
///
/// Implementations are loaded before the first query and must tolerate
/// concurrent reads.
pub trait ILexicalResource: Send + Sync {
    /// Every sense the word can take, across all parts of speech.
    /// Unknown words yield an empty vector.
    fn senses_of(&self, word: &str) -> Vec<SenseId>;

    /// Senses one hypernym edge above `sense`.
    fn direct_hypernyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// Senses one hypernym edge below `sense`.
    fn direct_hyponyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// Human-readable identifier, e.g. `dog.n.01`.
    fn sense_name(&self, sense: SenseId) -> Option<String>;

    /// Total number of senses in the resource.
    fn sense_count(&self) -> usize;
}
