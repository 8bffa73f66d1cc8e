//! The saturation loop.
//!
//! Rules wait in a FIFO work queue. Popping a rule pairs it with every stored
//! rule of the opposite partition that the unification index offers, runs the
//! calculus on each pair, and admits the normalized conclusions. Admission
//! keeps each partition free of subsumed rules. The loop ends when the queue
//! drains or the timeout fires.

use std::collections::{BTreeSet, VecDeque};
use std::time::Instant;

use gsat_foundation::{Error, Result};
use gsat_index::{
    ExactAtomSubsumer, ExhaustiveFilter, FilterSubsumer, Granularity, PredicateFilter, Subsumer,
    TrieFilter,
};
use gsat_rules::{
    Dependency, Interned, RuleArena, RuleId, Tgd, VariableNaming, check_arities, strip_tautology,
    vnf,
};
use gsat_unify::{PathIndex, PredicateUnificationIndex, UnificationIndex};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::calculus::{Calculus, ExistentialCalculus, Partition, SkolemCalculus, is_guarded};
use crate::config::{Algorithm, SaturationConfig, SubsumptionStrategy, UnificationStrategy};
use crate::result::{Saturation, SaturationOutcome, SaturationStats};

// =============================================================================
// Saturator
// =============================================================================

/// Computes the Datalog rewriting of a set of guarded dependencies.
#[derive(Clone, Debug, Default)]
pub struct Saturator {
    config: SaturationConfig,
}

impl Saturator {
    /// Creates a saturator with the given configuration.
    #[must_use]
    pub fn new(config: SaturationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SaturationConfig {
        &self.config
    }

    /// Saturates the dependencies and returns the full rules of the fixpoint.
    ///
    /// Dependencies with an empty head or without a guard are discarded and
    /// counted. A timeout is not an error: the partial rule set is returned
    /// with [`SaturationOutcome::TimedOut`], or with
    /// [`SaturationOutcome::PopLimitReached`] when the pop limit stops the loop.
    ///
    /// # Errors
    /// Returns an error if the input violates the dependency contract (function
    /// terms, existentials in the body, or inconsistent predicate arities).
    pub fn run(&self, dependencies: &[Dependency]) -> Result<Saturation> {
        check_arities(dependencies)?;

        match self.config.algorithm {
            Algorithm::Existential => {
                Run::new(ExistentialCalculus::default(), &self.config).execute(dependencies)
            }
            Algorithm::Skolem => {
                Run::new(SkolemCalculus::new(false), &self.config).execute(dependencies)
            }
            Algorithm::OrderedSkolem => {
                Run::new(SkolemCalculus::new(true), &self.config).execute(dependencies)
            }
        }
    }
}

fn subsumer(config: &SaturationConfig) -> Box<dyn Subsumer> {
    match config.subsumption {
        SubsumptionStrategy::Exhaustive => Box::new(FilterSubsumer::new(ExhaustiveFilter::new())),
        SubsumptionStrategy::Predicate => Box::new(FilterSubsumer::new(PredicateFilter::new(
            Granularity::Predicate,
        ))),
        SubsumptionStrategy::Atom => {
            Box::new(FilterSubsumer::new(PredicateFilter::new(Granularity::Atom)))
        }
        SubsumptionStrategy::Trie => Box::new(FilterSubsumer::new(TrieFilter::new(
            config.max_predicates,
        ))),
        SubsumptionStrategy::Exact => Box::new(ExactAtomSubsumer::new()),
    }
}

fn unification_index(config: &SaturationConfig) -> Box<dyn UnificationIndex> {
    match config.unification {
        UnificationStrategy::Predicate => Box::new(PredicateUnificationIndex::new()),
        UnificationStrategy::Path => Box::new(PathIndex::new()),
    }
}

// =============================================================================
// Run State
// =============================================================================

/// State of one saturation run.
struct Run<'a, C> {
    calculus: C,
    config: &'a SaturationConfig,
    naming: VariableNaming,
    arena: RuleArena,
    /// Indexed by [`Partition::index`].
    subsumers: [Box<dyn Subsumer>; 2],
    indexes: [Box<dyn UnificationIndex>; 2],
    queue: VecDeque<RuleId>,
    stats: SaturationStats,
}

impl<'a, C: Calculus> Run<'a, C> {
    fn new(calculus: C, config: &'a SaturationConfig) -> Self {
        Self {
            calculus,
            config,
            naming: VariableNaming::new(),
            arena: RuleArena::new(),
            subsumers: [subsumer(config), subsumer(config)],
            indexes: [unification_index(config), unification_index(config)],
            queue: VecDeque::new(),
            stats: SaturationStats::default(),
        }
    }

    fn execute(mut self, dependencies: &[Dependency]) -> Result<Saturation> {
        let start = Instant::now();
        self.stats.inputs = dependencies.len();

        let seeds = self.seeds(dependencies);
        self.stats.seeds = seeds.len();
        tracing::info!(
            inputs = self.stats.inputs,
            seeds = self.stats.seeds,
            algorithm = ?self.config.algorithm,
            "saturation started"
        );

        for seed in seeds {
            self.admit(seed)?;
        }

        let mut outcome = SaturationOutcome::Completed;
        while let Some(id) = self.queue.pop_front() {
            if self.config.timeout.is_some_and(|limit| start.elapsed() >= limit) {
                tracing::warn!(
                    limit = ?self.config.timeout,
                    pending = self.queue.len() + 1,
                    "saturation timed out"
                );
                outcome = SaturationOutcome::TimedOut;
                break;
            }
            if self.config.max_pops.is_some_and(|limit| self.stats.pops >= limit) {
                tracing::warn!(
                    limit = ?self.config.max_pops,
                    pending = self.queue.len() + 1,
                    "saturation reached its pop limit"
                );
                outcome = SaturationOutcome::PopLimitReached;
                break;
            }
            self.stats.pops += 1;
            self.process(id)?;
        }

        let full_rules = self.output();
        self.stats.elapsed = start.elapsed();
        tracing::info!(
            full = full_rules.len(),
            pops = self.stats.pops,
            subsumed = self.stats.subsumed,
            elapsed = ?self.stats.elapsed,
            "saturation finished"
        );

        Ok(Saturation {
            full_rules,
            outcome,
            stats: self.stats,
        })
    }

    /// Filters the inputs and expands them into the initial rules.
    fn seeds(&mut self, dependencies: &[Dependency]) -> Vec<Tgd> {
        let mut seeds = Vec::new();
        for (index, dependency) in dependencies.iter().enumerate() {
            if !dependency.is_tgd() {
                tracing::debug!(index, %dependency, "discarding dependency with empty head");
                self.stats.discarded_non_tgd += 1;
                continue;
            }
            let tgd = dependency.to_tgd();
            if !is_guarded(&tgd) {
                tracing::warn!(index, %dependency, "discarding unguarded dependency");
                self.stats.discarded_unguarded += 1;
                continue;
            }
            seeds.extend(self.calculus.seeds(&tgd));
        }

        if let Some(seed) = self.config.shuffle_seed {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            seeds.shuffle(&mut rng);
        }
        seeds
    }

    /// Adds a normalized rule unless it is known, tautological, unguarded, or
    /// subsumed. Stored rules it subsumes are removed.
    fn admit(&mut self, tgd: Tgd) -> Result<()> {
        let tgd = if self.config.discard_tautologies {
            let heads = tgd.head().len();
            match strip_tautology(tgd) {
                None => {
                    self.stats.tautologies += 1;
                    return Ok(());
                }
                Some(stripped) if stripped.head().len() < heads => {
                    self.stats.tautologies += 1;
                    vnf(&stripped, &self.naming)
                }
                Some(stripped) => stripped,
            }
        } else {
            tgd
        };

        let calculus = &mut self.calculus;
        let id = match self.arena.intern(tgd, |tgd| calculus.build(tgd)) {
            Ok(Interned::New(id)) => id,
            Ok(Interned::Existing(_)) => {
                self.stats.duplicates += 1;
                return Ok(());
            }
            Err(err) if err.is_discardable() => {
                self.stats.unguarded_resolvents += 1;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let Some(rule) = self.arena.get(id) else {
            return Err(Error::internal(format!("interned rule {id} missing from the arena")));
        };
        let side = self.calculus.partition(rule).index();
        if self.subsumers[side].is_subsumed(&self.arena, rule.tgd()) {
            self.stats.subsumed += 1;
            return Ok(());
        }

        for removed in self.subsumers[side].remove_subsumed(&self.arena, rule.tgd()) {
            if let Some(old) = self.arena.get(removed) {
                for atom in self.calculus.join_atoms(old) {
                    self.indexes[side].remove(removed, &atom);
                }
            }
            self.stats.removed += 1;
        }

        tracing::debug!(%id, rule = %rule.tgd(), "accepted");
        self.subsumers[side].insert(id, rule.tgd());
        for atom in self.calculus.join_atoms(rule) {
            self.indexes[side].insert(id, &atom);
        }
        self.queue.push_back(id);
        Ok(())
    }

    /// Runs every inference between a popped rule and its stored partners.
    fn process(&mut self, id: RuleId) -> Result<()> {
        let Some(rule) = self.arena.get(id) else {
            return Err(Error::internal(format!("queued rule {id} missing from the arena")));
        };
        let partition = self.calculus.partition(rule);
        if !self.subsumers[partition.index()].contains(id) {
            return Ok(());
        }

        let other = partition.other().index();
        let partners: BTreeSet<RuleId> = self
            .calculus
            .join_atoms(rule)
            .iter()
            .flat_map(|atom| self.indexes[other].candidates(atom))
            .collect();

        for partner in partners {
            if !self.subsumers[partition.index()].contains(id) {
                break;
            }
            if !self.subsumers[other].contains(partner) {
                continue;
            }
            let (Some(rule), Some(mate)) = (self.arena.get(id), self.arena.get(partner)) else {
                continue;
            };
            let (left, right) = match partition {
                Partition::Left => (rule.clone(), mate.clone()),
                Partition::Right => (mate.clone(), rule.clone()),
            };

            self.stats.inferences += 1;
            let conclusions = self.calculus.infer(&left, &right);
            self.stats.generated += conclusions.len();
            for conclusion in conclusions {
                self.admit(conclusion)?;
            }
        }
        Ok(())
    }

    /// Collects the output rules of the right partition, sorted.
    fn output(&self) -> Vec<Tgd> {
        let right = Partition::Right.index();
        let mut rules: Vec<Tgd> = self.subsumers[right]
            .all()
            .into_iter()
            .filter_map(|id| self.arena.get(id))
            .filter(|rule| self.calculus.is_output(rule))
            .map(|rule| rule.tgd().clone())
            .collect();
        rules.sort();
        rules
    }
}
