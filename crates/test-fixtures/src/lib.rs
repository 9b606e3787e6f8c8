//! Test fixture loader for the apriori lexicon and golden phrase pairs.
//!
//! Provides typed deserialization of fixture JSON files and helpers for
//! locating them from any crate in the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Miniature WordNet-shaped lexicon used across the workspace's tests.
pub const MINI_LEXICON: &str = "lexicon/mini_wordnet.json";

/// A lexicon whose hypernym edges contain a cycle.
pub const CYCLIC_LEXICON: &str = "lexicon/cyclic.json";

/// Golden phrase pairs with expected verdicts.
pub const GOLDEN_PHRASE_PAIRS: &str = "golden/phrase_pairs.json";

/// One golden comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct PhrasePairCase {
    pub name: String,
    pub first: String,
    pub second: String,
    pub analytical: bool,
    /// Lemma pair expected to carry the evidence, when analytical.
    #[serde(default)]
    pub evidence: Option<(String, String)>,
}

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as its raw text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load the golden phrase pairs.
pub fn golden_phrase_pairs() -> Vec<PhrasePairCase> {
    load_fixture(GOLDEN_PHRASE_PAIRS)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
