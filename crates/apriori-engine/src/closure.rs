//! Memoized transitive hypernym closure.
//!
//! A sense's closure is every sense reachable by following one or more
//! hypernym edges. Entries are computed by depth-first search on first use,
//! stored in a `DashMap`, and never invalidated: the ontology is static for
//! the cache's lifetime.
//!
//! The search is Tarjan's strongly connected components algorithm. Senses
//! on a cycle reach each other, so every member of a component gets the same
//! ancestor set, stored once the whole component has been explored. Each
//! sense is expanded at most once per top-level call, which keeps a cyclic
//! resource linear in its size. On a DAG every component is a single sense
//! and this is plain memoized DFS.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use apriori_core::models::SenseId;
use apriori_core::traits::ILexicalResource;
use dashmap::DashMap;
use tracing::debug;

/// Ancestor set of one sense.
pub type AncestorSet = Arc<HashSet<SenseId>>;

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClosureCacheStats {
    pub entries: usize,
    /// Top-level lookups answered from the cache.
    pub hits: u64,
    /// Top-level lookups that had to search the resource.
    pub misses: u64,
}

/// Thread-safe Sense → ancestor-set table, shared by every query of an engine.
#[derive(Debug, Default)]
pub struct HypernymClosureCache {
    entries: DashMap<SenseId, AncestorSet>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HypernymClosureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// All transitive hypernyms of `sense`.
    ///
    /// Concurrent callers may compute the same entry twice; the first insert
    /// wins and both results are equal.
    pub fn closure(&self, resource: &dyn ILexicalResource, sense: SenseId) -> AncestorSet {
        if let Some(cached) = self.lookup(sense) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let mut search = Search::default();
        let ancestors = match self.visit(resource, sense, &mut search) {
            Visit::Closed(ancestors) => ancestors,
            // The first frame has the lowest index, so it always closes.
            Visit::Open(_) => Arc::new(HashSet::new()),
        };
        debug!(
            ?sense,
            ancestors = ancestors.len(),
            expanded = search.index.len(),
            "closure computed"
        );
        ancestors
    }

    /// Cached closure, if already computed.
    pub fn get(&self, sense: SenseId) -> Option<AncestorSet> {
        self.lookup(sense)
    }

    pub fn contains(&self, sense: SenseId) -> bool {
        self.entries.contains_key(&sense)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> ClosureCacheStats {
        ClosureCacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn lookup(&self, sense: SenseId) -> Option<AncestorSet> {
        // Clone out so no shard guard is held across recursion or insert.
        self.entries.get(&sense).map(|entry| Arc::clone(entry.value()))
    }

    /// Expand `sense` and everything it reaches that is not cached yet.
    fn visit(
        &self,
        resource: &dyn ILexicalResource,
        sense: SenseId,
        search: &mut Search,
    ) -> Visit {
        let index = search.index.len();
        search.index.insert(sense, index);
        search.stack.push(sense);
        search.on_stack.insert(sense);

        let mut ancestors = HashSet::new();
        let mut low = index;
        for hypernym in resource.direct_hypernyms(sense) {
            ancestors.insert(hypernym);
            if let Some(&seen_at) = search.index.get(&hypernym) {
                if search.on_stack.contains(&hypernym) {
                    low = low.min(seen_at);
                } else if let Some(closed) = self.lookup(hypernym) {
                    ancestors.extend(closed.iter().copied());
                }
                continue;
            }
            if let Some(cached) = self.lookup(hypernym) {
                ancestors.extend(cached.iter().copied());
                continue;
            }
            match self.visit(resource, hypernym, search) {
                Visit::Closed(closed) => ancestors.extend(closed.iter().copied()),
                Visit::Open(hypernym_low) => low = low.min(hypernym_low),
            }
        }
        search.partial.insert(sense, ancestors);

        if low < index {
            return Visit::Open(low);
        }

        // `sense` heads a component: pop it and give every member the union.
        let mut members = Vec::new();
        let mut closure = HashSet::new();
        while let Some(member) = search.stack.pop() {
            search.on_stack.remove(&member);
            if let Some(partial) = search.partial.remove(&member) {
                closure.extend(partial);
            }
            if member == sense {
                break;
            }
            members.push(member);
        }

        let stored = Arc::clone(self.entries.entry(sense).or_insert(Arc::new(closure)).value());
        for member in members {
            self.entries.entry(member).or_insert_with(|| Arc::clone(&stored));
        }
        Visit::Closed(stored)
    }
}

/// State of one top-level closure computation.
#[derive(Default)]
struct Search {
    /// Discovery order of every sense expanded in this call.
    index: HashMap<SenseId, usize>,
    /// Expanded senses whose component is not complete yet.
    stack: Vec<SenseId>,
    on_stack: HashSet<SenseId>,
    /// Ancestors gathered by each open sense, merged when its component closes.
    partial: HashMap<SenseId, HashSet<SenseId>>,
}

enum Visit {
    /// The sense's component is complete; this is its closure.
    Closed(AncestorSet),
    /// The sense sits on a cycle through an earlier frame; carries the
    /// smallest discovery index it reached.
    Open(usize),
}
