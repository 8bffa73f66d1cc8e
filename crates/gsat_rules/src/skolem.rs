//! Skolemization and single-head projection.
//!
//! A [`Skolemizer`] owns the counters for fresh function symbols (`sk#n`)
//! and auxiliary predicates (`aux#n`). One instance serves a whole run so
//! that no two skolemizations share a symbol.

use gsat_foundation::{Atom, AtomSet, FunctionTerm, Substitution, Term, Variable};

use crate::tgd::Tgd;

/// Prefix of generated function symbols.
pub const SKOLEM_PREFIX: &str = "sk#";

/// Prefix of generated auxiliary predicates.
pub const AUX_PREFIX: &str = "aux#";

/// Source of fresh function symbols and auxiliary predicates.
#[derive(Clone, Debug, Default)]
pub struct Skolemizer {
    functions: usize,
    predicates: usize,
}

impl Skolemizer {
    /// Creates a skolemizer whose counters start at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many function symbols have been issued.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions
    }

    /// Returns how many auxiliary predicates have been issued.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates
    }

    /// Replaces each existential variable with a fresh function term over
    /// the universal variables.
    pub fn skolemize(&mut self, tgd: &Tgd) -> Tgd {
        let args = tgd.universal_variables();
        self.replace_existentials(tgd, &args)
    }

    /// Replaces each existential variable with a fresh function term over
    /// the frontier variables.
    pub fn skolemize_frontier(&mut self, tgd: &Tgd) -> Tgd {
        let args = tgd.frontier();
        self.replace_existentials(tgd, &args)
    }

    /// Skolemizes over the universal variables, then emits one rule per head atom.
    pub fn single_headed(&mut self, tgd: &Tgd) -> Vec<Tgd> {
        split_head(&self.skolemize(tgd))
    }

    /// Skolemizes over the frontier, then emits one rule per head atom.
    ///
    /// When the rule has existential variables and its frontier is a strict
    /// subset of its universal variables, the body first derives a fresh
    /// auxiliary atom over the frontier, and the head is produced from that
    /// atom alone.
    pub fn frontier_projected(&mut self, tgd: &Tgd) -> Vec<Tgd> {
        if tgd.is_negative_constraint() {
            return vec![tgd.clone()];
        }

        let frontier = tgd.frontier();
        let projects = !tgd.existential_variables().is_empty()
            && frontier.len() < tgd.universal_variables().len();
        if !projects {
            return split_head(&self.skolemize_frontier(tgd));
        }

        let aux = Atom::over_variables(self.fresh_predicate(), &frontier);
        let mut rules = vec![Tgd::new(tgd.body().clone(), AtomSet::unit(aux.clone()))];
        let projected = Tgd::new(AtomSet::unit(aux), tgd.head().clone());
        rules.extend(split_head(&self.skolemize_frontier(&projected)));
        rules
    }

    fn replace_existentials(&mut self, tgd: &Tgd, args: &[Variable]) -> Tgd {
        let existentials = tgd.existential_variables();
        if existentials.is_empty() {
            return tgd.clone();
        }
        let sub: Substitution = existentials
            .into_iter()
            .map(|v| {
                let term = FunctionTerm::skolem(self.fresh_function(), args);
                (v, Term::Function(term))
            })
            .collect();
        Tgd::new(tgd.body().clone(), sub.apply_set(tgd.head()))
    }

    fn fresh_function(&mut self) -> String {
        self.functions += 1;
        format!("{SKOLEM_PREFIX}{}", self.functions - 1)
    }

    fn fresh_predicate(&mut self) -> String {
        self.predicates += 1;
        format!("{AUX_PREFIX}{}", self.predicates - 1)
    }
}

fn split_head(tgd: &Tgd) -> Vec<Tgd> {
    if tgd.head().len() <= 1 {
        return vec![tgd.clone()];
    }
    tgd.head()
        .iter()
        .map(|atom| Tgd::new(tgd.body().clone(), AtomSet::unit(atom.clone())))
        .collect()
}
