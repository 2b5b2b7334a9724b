// File: src/core/aggregator.rs
use crate::core::types::{DecompositionEntry, RootStats, RootToken};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Per-root frequency counts and example characters gathered from a
/// decomposition corpus.
#[derive(Debug, Clone, Default)]
pub struct RootAggregator {
    stats: HashMap<RootToken, RootStats>,
    /// Roots in the order they were first seen.
    seen_order: Vec<RootToken>,
}

impl RootAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates a whole corpus in order.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DecompositionEntry>,
    {
        let mut aggregator = Self::new();
        for entry in entries {
            aggregator.add_entry(entry);
        }
        info!(roots = aggregator.len(), "aggregated root usage");
        for root in aggregator.seen_order.iter().take(10) {
            let stats = &aggregator.stats[root];
            debug!(root = %root, frequency = stats.frequency, examples = %stats.examples.concat());
        }
        aggregator
    }

    /// Counts every root of one character. Empty tokens are ignored.
    ///
    /// A root used twice by the same character counts twice but lists the
    /// character as an example only once.
    pub fn add_entry(&mut self, entry: &DecompositionEntry) {
        let mut sampled = HashSet::new();
        for root in entry.roots.iter().filter(|r| !r.is_empty()) {
            if !self.stats.contains_key(root) {
                self.seen_order.push(root.clone());
            }
            let stats = self.stats.entry(root.clone()).or_default();
            stats.frequency += 1;
            if sampled.insert(root.as_str()) {
                stats.push_example(&entry.character);
            }
        }
    }

    pub fn frequency(&self, root: &str) -> u64 {
        self.stats.get(root).map_or(0, |s| s.frequency)
    }

    pub fn examples(&self, root: &str) -> &[String] {
        self.stats.get(root).map_or(&[], |s| s.examples.as_slice())
    }

    pub fn len(&self) -> usize {
        self.seen_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_order.is_empty()
    }
}
