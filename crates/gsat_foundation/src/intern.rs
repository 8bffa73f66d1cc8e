//! First-seen integer numbering of symbols.
//!
//! Retrieval indices and the atom order number predicates, function symbols,
//! and atoms lazily: the first key seen gets index 0, the next new key gets 1,
//! and so on. Each index instance owns its own numbering, so independent
//! saturation runs never share this state.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps keys to dense `u32` indices in order of first sight.
#[derive(Clone, Debug)]
pub struct Numbering<K> {
    keys: Vec<K>,
    index: HashMap<K, u32>,
}

impl<K> Default for Numbering<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Numbering<K> {
    /// Creates an empty numbering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `key`, assigning the next free index if it is new.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` keys are numbered.
    pub fn number(&mut self, key: &K) -> u32 {
        if let Some(&idx) = self.index.get(key) {
            return idx;
        }

        let idx = u32::try_from(self.keys.len()).expect("too many numbered keys");
        self.keys.push(key.clone());
        self.index.insert(key.clone(), idx);
        idx
    }

    /// Returns the index of `key` if it has been numbered.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<u32> {
        self.index.get(key).copied()
    }

    /// Returns the key numbered `idx`.
    #[must_use]
    pub fn key(&self, idx: u32) -> Option<&K> {
        self.keys.get(idx as usize)
    }

    /// Returns the number of numbered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing has been numbered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Forgets every assignment.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
    }
}
