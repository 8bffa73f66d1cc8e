//! Configuration for a saturation run.
//!
//! The index strategies only affect performance; every combination computes
//! the same set of full rules.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which inference calculus drives the fixpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Evolve non-full rules against full rules under the existential-variable check.
    #[default]
    Existential,
    /// Resolve skolemized rules, selecting every eligible atom.
    Skolem,
    /// Resolve skolemized rules, selecting only atoms maximal in the atom order.
    OrderedSkolem,
}

/// Which structure prunes subsumption candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubsumptionStrategy {
    /// No pruning; every stored rule is checked.
    Exhaustive,
    /// Postings keyed on predicates.
    Predicate,
    /// Postings keyed on whole atoms.
    Atom,
    /// Trie over bagged predicate ids.
    #[default]
    Trie,
    /// Trie over exact atom ids.
    Exact,
}

/// Which structure retrieves unification partners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnificationStrategy {
    /// Partners share the predicate.
    Predicate,
    /// Partners also agree on constants and function symbols per position.
    #[default]
    Path,
}

/// Configuration for [`Saturator`](crate::Saturator).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaturationConfig {
    /// Inference calculus.
    pub algorithm: Algorithm,
    /// Subsumption index.
    pub subsumption: SubsumptionStrategy,
    /// Unification index.
    pub unification: UnificationStrategy,
    /// Bag bound for the trie subsumption filter.
    pub max_predicates: usize,
    /// Wall-clock limit; `None` runs to the fixpoint.
    pub timeout: Option<Duration>,
    /// Limit on rules taken off the work queue; `None` runs to the fixpoint.
    pub max_pops: Option<usize>,
    /// Seed for a deterministic permutation of the seed rules.
    pub shuffle_seed: Option<u64>,
    /// Whether head atoms that repeat body atoms are dropped.
    pub discard_tautologies: bool,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Existential,
            subsumption: SubsumptionStrategy::Trie,
            unification: UnificationStrategy::Path,
            max_predicates: 150,
            timeout: None,
            max_pops: None,
            shuffle_seed: None,
            discard_tautologies: true,
        }
    }
}

impl SaturationConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every index disabled, for cross-checking.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            subsumption: SubsumptionStrategy::Exhaustive,
            unification: UnificationStrategy::Predicate,
            ..Self::default()
        }
    }

    /// Creates a configuration for ordered skolem resolution with exact subsumption.
    #[must_use]
    pub fn ordered_skolem() -> Self {
        Self {
            algorithm: Algorithm::OrderedSkolem,
            subsumption: SubsumptionStrategy::Exact,
            ..Self::default()
        }
    }

    /// Builder method to set the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builder method to set the subsumption strategy.
    #[must_use]
    pub fn with_subsumption(mut self, strategy: SubsumptionStrategy) -> Self {
        self.subsumption = strategy;
        self
    }

    /// Builder method to set the unification strategy.
    #[must_use]
    pub fn with_unification(mut self, strategy: UnificationStrategy) -> Self {
        self.unification = strategy;
        self
    }

    /// Builder method to set the trie bag bound.
    #[must_use]
    pub fn with_max_predicates(mut self, max: usize) -> Self {
        self.max_predicates = max;
        self
    }

    /// Builder method to set a timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder method to stop after `max` queue pops (kill switch).
    #[must_use]
    pub fn with_max_pops(mut self, max: usize) -> Self {
        self.max_pops = Some(max);
        self
    }

    /// Builder method to shuffle the seeds with the given seed.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Builder method to keep or drop tautological head atoms.
    #[must_use]
    pub fn with_discard_tautologies(mut self, discard: bool) -> Self {
        self.discard_tautologies = discard;
        self
    }
}
