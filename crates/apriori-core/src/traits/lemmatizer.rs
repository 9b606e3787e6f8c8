/// Reduces a surface word to its dictionary form.
pub trait ILemmatizer: Send + Sync {
    /// Deterministic and pure. Words with no known base form come back unchanged.
    fn lemmatize(&self, word: &str) -> String;
}
