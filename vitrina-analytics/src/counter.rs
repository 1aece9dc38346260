use std::collections::HashMap;
use std::hash::Hash;

/// Frequency map that remembers first-occurrence order.
///
/// Ranking is by count descending; equal counts keep the order in which keys were
/// first seen, so results never depend on hash iteration order.
#[derive(Debug, Clone)]
pub struct RankedCounter<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> RankedCounter<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// The `n` most frequent keys.
    pub fn top(self, n: usize) -> Vec<(K, u64)> {
        let mut entries = self.entries;
        // Stable sort: ties stay in first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<K: Eq + Hash + Clone> Default for RankedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}
