//! Candidate filters for subsumption checks.
//!
//! A filter over-approximates: every stored rule in a subsumption relation
//! with the query is returned, possibly alongside rules that are not.

use std::collections::{BTreeSet, HashMap};

use gsat_foundation::{Atom, AtomSet, Predicate};
use gsat_rules::{RuleId, Tgd};

/// Returns true if `general` subsumes `specific`.
#[must_use]
pub fn subsumes(general: &Tgd, specific: &Tgd) -> bool {
    general.body().is_subset(specific.body()) && specific.head().is_subset(general.head())
}

/// Candidate retrieval for subsumption.
///
/// All retrieval methods return sorted ids without duplicates.
pub trait SubsumptionFilter {
    /// Stores a rule.
    fn add(&mut self, id: RuleId, tgd: &Tgd);

    /// Removes a stored rule; `tgd` must be the rule passed to `add`.
    fn remove(&mut self, id: RuleId, tgd: &Tgd);

    /// Returns true if the id is stored.
    fn contains(&self, id: RuleId) -> bool;

    /// Returns every stored id.
    fn all(&self) -> Vec<RuleId>;

    /// Returns the number of stored rules.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored rules that `tgd` may subsume.
    fn subsumed_candidates(&self, tgd: &Tgd) -> Vec<RuleId>;

    /// Stored rules that may subsume `tgd`.
    fn subsuming_candidates(&self, tgd: &Tgd) -> Vec<RuleId>;
}

// =============================================================================
// Exhaustive
// =============================================================================

/// A disabled filter: every stored rule is a candidate.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveFilter {
    members: BTreeSet<RuleId>,
}

impl ExhaustiveFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubsumptionFilter for ExhaustiveFilter {
    fn add(&mut self, id: RuleId, _tgd: &Tgd) {
        self.members.insert(id);
    }

    fn remove(&mut self, id: RuleId, _tgd: &Tgd) {
        self.members.remove(&id);
    }

    fn contains(&self, id: RuleId) -> bool {
        self.members.contains(&id)
    }

    fn all(&self) -> Vec<RuleId> {
        self.members.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn subsumed_candidates(&self, _tgd: &Tgd) -> Vec<RuleId> {
        self.all()
    }

    fn subsuming_candidates(&self, _tgd: &Tgd) -> Vec<RuleId> {
        self.all()
    }
}

// =============================================================================
// Predicate / Atom
// =============================================================================

/// What a [`PredicateFilter`] keys rules on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Key on predicates; fewer, larger postings.
    #[default]
    Predicate,
    /// Key on whole atoms; exact but larger maps.
    Atom,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum FilterKey {
    Predicate(Predicate),
    Atom(Atom),
}

/// Filter mapping each body and head key to the rules containing it.
///
/// Subsumed candidates must contain every body key of the query, subsuming
/// candidates every head key. The intersection starts from the smallest
/// posting list.
#[derive(Clone, Debug, Default)]
pub struct PredicateFilter {
    granularity: Granularity,
    body: HashMap<FilterKey, BTreeSet<RuleId>>,
    head: HashMap<FilterKey, BTreeSet<RuleId>>,
    members: BTreeSet<RuleId>,
}

impl PredicateFilter {
    /// Creates an empty filter keyed at the given granularity.
    #[must_use]
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }

    /// Returns the granularity.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    fn keys(&self, atoms: &AtomSet) -> BTreeSet<FilterKey> {
        atoms
            .iter()
            .map(|atom| match self.granularity {
                Granularity::Predicate => FilterKey::Predicate(atom.predicate().clone()),
                Granularity::Atom => FilterKey::Atom(atom.clone()),
            })
            .collect()
    }

    fn containing_all(
        &self,
        postings: &HashMap<FilterKey, BTreeSet<RuleId>>,
        keys: &BTreeSet<FilterKey>,
    ) -> Vec<RuleId> {
        let mut lists = Vec::with_capacity(keys.len());
        for key in keys {
            match postings.get(key) {
                Some(ids) => lists.push(ids),
                None => return Vec::new(),
            }
        }
        lists.sort_by_key(|ids| ids.len());
        let Some((rarest, rest)) = lists.split_first() else {
            return self.members.iter().copied().collect();
        };
        rarest
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|ids| ids.contains(id)))
            .collect()
    }
}

fn post(postings: &mut HashMap<FilterKey, BTreeSet<RuleId>>, keys: BTreeSet<FilterKey>, id: RuleId) {
    for key in keys {
        postings.entry(key).or_default().insert(id);
    }
}

fn unpost(postings: &mut HashMap<FilterKey, BTreeSet<RuleId>>, keys: &BTreeSet<FilterKey>, id: RuleId) {
    for key in keys {
        if let Some(ids) = postings.get_mut(key) {
            ids.remove(&id);
            if ids.is_empty() {
                postings.remove(key);
            }
        }
    }
}

impl SubsumptionFilter for PredicateFilter {
    fn add(&mut self, id: RuleId, tgd: &Tgd) {
        let body = self.keys(tgd.body());
        let head = self.keys(tgd.head());
        post(&mut self.body, body, id);
        post(&mut self.head, head, id);
        self.members.insert(id);
    }

    fn remove(&mut self, id: RuleId, tgd: &Tgd) {
        if !self.members.remove(&id) {
            return;
        }
        let body = self.keys(tgd.body());
        let head = self.keys(tgd.head());
        unpost(&mut self.body, &body, id);
        unpost(&mut self.head, &head, id);
    }

    fn contains(&self, id: RuleId) -> bool {
        self.members.contains(&id)
    }

    fn all(&self) -> Vec<RuleId> {
        self.members.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn subsumed_candidates(&self, tgd: &Tgd) -> Vec<RuleId> {
        self.containing_all(&self.body, &self.keys(tgd.body()))
    }

    fn subsuming_candidates(&self, tgd: &Tgd) -> Vec<RuleId> {
        self.containing_all(&self.head, &self.keys(tgd.head()))
    }
}
