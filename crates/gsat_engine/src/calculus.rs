//! The two inference calculi behind the saturation loop.
//!
//! Both sort rules into a left and a right collection and only ever infer
//! from one left rule and one right rule, retrieved through the atoms each
//! rule exposes for joining.

use gsat_foundation::{Atom, Result};
use gsat_rules::{
    AtomOrder, Rule, Side, Skolemizer, Tgd, VariableNaming, compute_guard, hnf, vnf,
};

use crate::evolve::evolve;
use crate::resolve::resolve;

/// Which collection a rule belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Partition {
    /// Non-full rules, or head-selected skolemized rules.
    Left,
    /// Full rules, or body-selected skolemized rules.
    Right,
}

impl Partition {
    pub(crate) fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

pub(crate) trait Calculus {
    /// Normal forms an input rule contributes to the initial queue.
    fn seeds(&mut self, tgd: &Tgd) -> Vec<Tgd>;

    /// Builds the stored form of a rule.
    fn build(&mut self, tgd: Tgd) -> Result<Rule>;

    fn partition(&self, rule: &Rule) -> Partition;

    /// Atoms under which a rule is indexed and through which it finds partners.
    fn join_atoms(&self, rule: &Rule) -> Vec<Atom>;

    /// Normalized conclusions of a left rule and a right rule.
    fn infer(&mut self, left: &Rule, right: &Rule) -> Vec<Tgd>;

    /// Whether a right rule belongs in the output.
    fn is_output(&self, rule: &Rule) -> bool;
}

// =============================================================================
// Existential
// =============================================================================

/// Evolve over head and variable normal forms.
#[derive(Debug, Default)]
pub(crate) struct ExistentialCalculus {
    naming: VariableNaming,
}

impl ExistentialCalculus {
    fn normalize(&self, tgd: &Tgd) -> Vec<Tgd> {
        hnf(tgd).iter().map(|part| vnf(part, &self.naming)).collect()
    }
}

impl Calculus for ExistentialCalculus {
    fn seeds(&mut self, tgd: &Tgd) -> Vec<Tgd> {
        self.normalize(tgd)
    }

    fn build(&mut self, tgd: Tgd) -> Result<Rule> {
        Rule::guarded(tgd)
    }

    fn partition(&self, rule: &Rule) -> Partition {
        if rule.tgd().is_full() {
            Partition::Right
        } else {
            Partition::Left
        }
    }

    fn join_atoms(&self, rule: &Rule) -> Vec<Atom> {
        match self.partition(rule) {
            Partition::Left => rule.head().iter().cloned().collect(),
            Partition::Right => rule.body().iter().cloned().collect(),
        }
    }

    fn infer(&mut self, left: &Rule, right: &Rule) -> Vec<Tgd> {
        evolve(left.tgd(), right.tgd())
            .iter()
            .flat_map(|resolvent| self.normalize(resolvent))
            .collect()
    }

    fn is_output(&self, _rule: &Rule) -> bool {
        true
    }
}

// =============================================================================
// Skolem
// =============================================================================

/// Resolution over skolemized single-head rules, optionally ordered.
#[derive(Debug)]
pub(crate) struct SkolemCalculus {
    naming: VariableNaming,
    skolemizer: Skolemizer,
    order: Option<AtomOrder>,
}

impl SkolemCalculus {
    pub(crate) fn new(ordered: bool) -> Self {
        Self {
            naming: VariableNaming::new(),
            skolemizer: Skolemizer::new(),
            order: ordered.then(AtomOrder::new),
        }
    }
}

impl Calculus for SkolemCalculus {
    fn seeds(&mut self, tgd: &Tgd) -> Vec<Tgd> {
        let normal = vnf(tgd, &self.naming);
        self.skolemizer
            .frontier_projected(&normal)
            .iter()
            .map(|rule| vnf(rule, &self.naming))
            .collect()
    }

    fn build(&mut self, tgd: Tgd) -> Result<Rule> {
        match &mut self.order {
            Some(order) => Rule::ordered(tgd, order),
            None => Rule::skolemized(tgd),
        }
    }

    fn partition(&self, rule: &Rule) -> Partition {
        match rule.selection().map(gsat_rules::Selection::side) {
            Some(Side::Head) => Partition::Left,
            _ => Partition::Right,
        }
    }

    fn join_atoms(&self, rule: &Rule) -> Vec<Atom> {
        rule.selection()
            .map(|selection| selection.atoms().to_vec())
            .unwrap_or_default()
    }

    fn infer(&mut self, left: &Rule, right: &Rule) -> Vec<Tgd> {
        resolve(left, right)
            .iter()
            .map(|resolvent| vnf(resolvent, &self.naming))
            .collect()
    }

    fn is_output(&self, rule: &Rule) -> bool {
        rule.tgd().is_function_free()
    }
}

/// Returns true if the rule has a guard.
pub(crate) fn is_guarded(tgd: &Tgd) -> bool {
    compute_guard(tgd).is_ok()
}
