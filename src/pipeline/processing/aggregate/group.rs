use std::collections::HashMap;
use std::hash::Hash;

/// Group-by that remembers the order in which keys first appeared.
///
/// Sorting the result with a stable sort then breaks ties by first
/// appearance in the source table.
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, init()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> OrderedGroups<K, f64> {
    /// Sum `values` per key
    pub fn sum<I: IntoIterator<Item = (K, f64)>>(values: I) -> Self {
        let mut groups = Self::new();
        for (key, value) in values {
            *groups.entry_or_insert_with(key, || 0.0) += value;
        }
        groups
    }

    /// Sums sorted descending; equal sums keep first-appearance order
    pub fn into_sorted_desc(self) -> Vec<(K, f64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}
