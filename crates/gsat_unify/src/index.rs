//! Candidate retrieval for unification partners.
//!
//! An index maps atoms to the rules that hold them. A query returns every
//! rule holding an atom that might unify with the query atom; callers still
//! run [`most_general_unifier`](crate::most_general_unifier) on each
//! candidate.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use gsat_foundation::{Atom, Predicate};
use gsat_rules::RuleId;

/// Retrieval of rules holding atoms that may unify with a query atom.
///
/// A rule may be inserted under several atoms; it stays a candidate until
/// every one of them has been removed again.
pub trait UnificationIndex {
    /// Records that rule `id` holds `atom`.
    fn insert(&mut self, id: RuleId, atom: &Atom);

    /// Forgets one earlier `insert(id, atom)`.
    fn remove(&mut self, id: RuleId, atom: &Atom);

    /// Returns rules holding an atom possibly unifiable with `atom`, sorted
    /// and without duplicates.
    fn candidates(&self, atom: &Atom) -> Vec<RuleId>;

    /// Removes every entry.
    fn clear(&mut self);
}

/// Reference-counted id sets shared by both index implementations.
#[derive(Clone, Debug)]
pub(crate) struct Postings<K> {
    entries: HashMap<K, BTreeMap<RuleId, usize>>,
}

impl<K> Default for Postings<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: std::hash::Hash + Eq> Postings<K> {
    pub(crate) fn add(&mut self, key: K, id: RuleId) {
        *self.entries.entry(key).or_default().entry(id).or_insert(0) += 1;
    }

    pub(crate) fn remove(&mut self, key: &K, id: RuleId) {
        let Some(ids) = self.entries.get_mut(key) else {
            return;
        };
        if let Some(count) = ids.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                ids.remove(&id);
            }
        }
        if ids.is_empty() {
            self.entries.remove(key);
        }
    }

    pub(crate) fn ids(&self, key: &K) -> BTreeSet<RuleId> {
        self.entries
            .get(key)
            .map(|ids| ids.keys().copied().collect())
            .unwrap_or_default()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index keyed on the predicate alone.
#[derive(Clone, Debug, Default)]
pub struct PredicateUnificationIndex {
    postings: Postings<Predicate>,
}

impl PredicateUnificationIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl UnificationIndex for PredicateUnificationIndex {
    fn insert(&mut self, id: RuleId, atom: &Atom) {
        self.postings.add(atom.predicate().clone(), id);
    }

    fn remove(&mut self, id: RuleId, atom: &Atom) {
        self.postings.remove(atom.predicate(), id);
    }

    fn candidates(&self, atom: &Atom) -> Vec<RuleId> {
        self.postings.ids(atom.predicate()).into_iter().collect()
    }

    fn clear(&mut self) {
        self.postings.clear();
    }
}
