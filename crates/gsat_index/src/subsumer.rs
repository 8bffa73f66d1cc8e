//! Subsumers keep a rule collection free of redundant members.

use gsat_rules::{RuleArena, RuleId, Tgd};

use crate::filter::{SubsumptionFilter, subsumes};

/// A rule collection maintained up to subsumption.
pub trait Subsumer {
    /// Returns true if a stored rule subsumes `tgd`.
    fn is_subsumed(&self, arena: &RuleArena, tgd: &Tgd) -> bool;

    /// Removes and returns every stored rule that `tgd` subsumes, sorted.
    fn remove_subsumed(&mut self, arena: &RuleArena, tgd: &Tgd) -> Vec<RuleId>;

    /// Stores a rule.
    fn insert(&mut self, id: RuleId, tgd: &Tgd);

    /// Removes a stored rule.
    fn remove(&mut self, id: RuleId, tgd: &Tgd);

    /// Returns true if the id is stored.
    fn contains(&self, id: RuleId) -> bool;

    /// Returns every stored id, sorted.
    fn all(&self) -> Vec<RuleId>;

    /// Returns the number of stored rules.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Subsumer that verifies the candidates of a [`SubsumptionFilter`] against
/// the rules in the arena.
#[derive(Clone, Debug, Default)]
pub struct FilterSubsumer<F> {
    filter: F,
}

impl<F: SubsumptionFilter> FilterSubsumer<F> {
    /// Wraps a filter.
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Returns the underlying filter.
    #[must_use]
    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<F: SubsumptionFilter> Subsumer for FilterSubsumer<F> {
    fn is_subsumed(&self, arena: &RuleArena, tgd: &Tgd) -> bool {
        self.filter
            .subsuming_candidates(tgd)
            .into_iter()
            .filter_map(|id| arena.get(id))
            .any(|stored| subsumes(stored.tgd(), tgd))
    }

    fn remove_subsumed(&mut self, arena: &RuleArena, tgd: &Tgd) -> Vec<RuleId> {
        let mut removed = Vec::new();
        for id in self.filter.subsumed_candidates(tgd) {
            let Some(stored) = arena.get(id) else {
                continue;
            };
            if subsumes(tgd, stored.tgd()) {
                self.filter.remove(id, stored.tgd());
                removed.push(id);
            }
        }
        removed
    }

    fn insert(&mut self, id: RuleId, tgd: &Tgd) {
        self.filter.add(id, tgd);
    }

    fn remove(&mut self, id: RuleId, tgd: &Tgd) {
        self.filter.remove(id, tgd);
    }

    fn contains(&self, id: RuleId) -> bool {
        self.filter.contains(id)
    }

    fn all(&self) -> Vec<RuleId> {
        self.filter.all()
    }

    fn len(&self) -> usize {
        self.filter.len()
    }
}
