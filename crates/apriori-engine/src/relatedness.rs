//! Word-level relatedness: synonymy, direct hypernymy/hyponymy, then
//! transitive hypernymy through the closure cache.

use std::sync::Arc;

use apriori_core::models::{RelationKind, SenseId, SenseMatch};
use apriori_core::traits::ILexicalResource;

use crate::closure::HypernymClosureCache;

/// Checks every sense of one word against every sense of another.
///
/// A word is polymorphic over all its senses: one related pair anywhere in
/// the product is enough.
pub struct RelatednessChecker {
    resource: Arc<dyn ILexicalResource>,
    closures: Arc<HypernymClosureCache>,
}

impl RelatednessChecker {
    pub fn new(resource: Arc<dyn ILexicalResource>, closures: Arc<HypernymClosureCache>) -> Self {
        Self {
            resource,
            closures,
        }
    }

    pub fn are_related(&self, word1: &str, word2: &str) -> bool {
        self.find_relation(word1, word2).is_some()
    }

    /// First related sense pair, scanning `word1`'s senses in the outer loop.
    /// `None` when either word has no senses.
    pub fn find_relation(&self, word1: &str, word2: &str) -> Option<SenseMatch> {
        let left = self.resource.senses_of(word1);
        if left.is_empty() {
            return None;
        }
        let right = self.resource.senses_of(word2);
        if right.is_empty() {
            return None;
        }

        for &s1 in &left {
            for &s2 in &right {
                if let Some(kind) = self.relate(s1, s2) {
                    return Some(SenseMatch {
                        left: s1,
                        right: s2,
                        kind,
                    });
                }
            }
        }
        None
    }

    /// How `s1` relates to `s2`, if at all.
    ///
    /// Direct edges are checked before closures so a one-step relation never
    /// pays for a transitive search.
    pub fn relate(&self, s1: SenseId, s2: SenseId) -> Option<RelationKind> {
        if s1 == s2 {
            return Some(RelationKind::Synonym);
        }

        if self.resource.direct_hypernyms(s2).contains(&s1) {
            return Some(RelationKind::Hypernym);
        }
        if self.resource.direct_hyponyms(s2).contains(&s1) {
            return Some(RelationKind::Hyponym);
        }
        if self.resource.direct_hypernyms(s1).contains(&s2) {
            return Some(RelationKind::Hyponym);
        }
        if self.resource.direct_hyponyms(s1).contains(&s2) {
            return Some(RelationKind::Hypernym);
        }

        if self.closures.closure(self.resource.as_ref(), s1).contains(&s2) {
            return Some(RelationKind::TransitiveHyponym);
        }
        if self.closures.closure(self.resource.as_ref(), s2).contains(&s1) {
            return Some(RelationKind::TransitiveHypernym);
        }
        None
    }

    pub fn resource(&self) -> &Arc<dyn ILexicalResource> {
        &self.resource
    }

    pub fn closures(&self) -> &Arc<HypernymClosureCache> {
        &self.closures
    }
}
