//! WordNet "morphy": reduce an inflected word to base forms that exist in
//! the lexicon for a given part of speech.
//!
//! Irregular forms come from the exception tables. Regular forms come from
//! suffix detachment rules, applied repeatedly until a known form appears.

use std::collections::{HashMap, HashSet};

use apriori_core::models::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Suffix detachment rules for a part of speech. Adverbs have none.
pub fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Morphological analyser holding the irregular-inflection tables.
#[derive(Debug, Clone, Default)]
pub struct Morphy {
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

impl Morphy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an irregular inflection, e.g. `(Noun, "geese", ["goose"])`.
    pub fn add_exception(&mut self, pos: PartOfSpeech, inflected: &str, bases: &[String]) {
        let table = self.exceptions.entry(pos).or_default();
        let entry = table.entry(inflected.to_lowercase()).or_default();
        for base in bases {
            let base = base.to_lowercase();
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.values().map(HashMap::len).sum()
    }

    /// Base forms of `word` for `pos`, keeping only those `exists` accepts.
    ///
    /// The word itself counts as a base form when it exists. Order follows
    /// rule order, duplicates removed. Empty when nothing is known.
    pub fn base_forms<F>(&self, word: &str, pos: PartOfSpeech, exists: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        if word.is_empty() {
            return Vec::new();
        }

        if let Some(bases) = self.exceptions.get(&pos).and_then(|t| t.get(word)) {
            let candidates = std::iter::once(word.to_string()).chain(bases.iter().cloned());
            return filter_forms(candidates, &exists);
        }

        let rules = rules(pos);
        let mut forms = apply_rules(std::slice::from_ref(&word.to_string()), rules);
        let found = filter_forms(
            std::iter::once(word.to_string()).chain(forms.iter().cloned()),
            &exists,
        );
        if !found.is_empty() {
            return found;
        }

        // Every rule either shortens the form or leaves a suffix no rule
        // matches, so this terminates.
        while !forms.is_empty() {
            forms = apply_rules(&forms, rules);
            let found = filter_forms(forms.iter().cloned(), &exists);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                let derived = format!("{stem}{new}");
                if seen.insert(derived.clone()) {
                    out.push(derived);
                }
            }
        }
    }
    out
}

fn filter_forms<I, F>(forms: I, exists: &F) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|form| exists(form) && seen.insert(form.clone()))
        .collect()
}
