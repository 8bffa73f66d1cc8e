//! Head normal form and variable normal form.
//!
//! HNF separates head atoms that mention an existential variable from those
//! that do not. VNF renames variables to `{prefix}{n}` so that structurally
//! permuted copies of a rule become the same set pair, letting plain set
//! equality stand in for equivalence up to renaming.

use std::cmp::Ordering;
use std::collections::HashMap;

use gsat_foundation::{
    Atom, AtomSet, Constant, FunctionSymbol, Substitution, Term, Variable,
};

use crate::tgd::Tgd;

// =============================================================================
// Head Normal Form
// =============================================================================

/// Splits a rule into its existential part and its full part.
///
/// Returns one or two rules sharing the original body; an empty partition is
/// dropped. A `{⊥}` head is returned unchanged.
#[must_use]
pub fn hnf(tgd: &Tgd) -> Vec<Tgd> {
    if tgd.is_negative_constraint() {
        return vec![tgd.clone()];
    }

    let existentials = tgd.existential_variables();
    if existentials.is_empty() {
        return vec![tgd.clone()];
    }

    let (existential, full): (Vec<&Atom>, Vec<&Atom>) = tgd
        .head()
        .iter()
        .partition(|atom| existentials.iter().any(|v| atom.mentions(v)));

    [existential, full]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(|part| Tgd::new(tgd.body().clone(), part.into_iter().cloned().collect()))
        .collect()
}

/// Drops head atoms that already occur in the body.
///
/// Returns `None` if nothing remains, i.e. the rule is a tautology.
#[must_use]
pub fn strip_tautology(tgd: Tgd) -> Option<Tgd> {
    if !tgd.head().iter().any(|a| tgd.body().contains(a)) {
        return Some(tgd);
    }
    let head = tgd.head().difference(tgd.body());
    if head.is_empty() {
        None
    } else {
        Some(Tgd::new(tgd.body().clone(), head))
    }
}

// =============================================================================
// Variable Normal Form
// =============================================================================

/// How VNF decides the numbering order of variables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamingMode {
    /// First appearance in the universal list, then the existential list.
    Naive,
    /// Head atoms then body atoms, each visited smallest-first by predicate
    /// and the shape of their arguments.
    #[default]
    Sorted,
}

/// Prefixes and mode for variable normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNaming {
    /// Prefix for universally quantified variables.
    pub universal_prefix: String,
    /// Prefix for existential variables.
    pub existential_prefix: String,
    /// Numbering mode.
    pub mode: NamingMode,
}

impl Default for VariableNaming {
    fn default() -> Self {
        Self {
            universal_prefix: "u".to_owned(),
            existential_prefix: "e".to_owned(),
            mode: NamingMode::Sorted,
        }
    }
}

impl VariableNaming {
    /// Creates the default naming (`u`, `e`, sorted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set both prefixes.
    #[must_use]
    pub fn with_prefixes(mut self, existential: &str, universal: &str) -> Self {
        self.existential_prefix = existential.to_owned();
        self.universal_prefix = universal.to_owned();
        self
    }

    /// Builder method to set the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: NamingMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Renames variables to their canonical names.
#[must_use]
pub fn vnf(tgd: &Tgd, naming: &VariableNaming) -> Tgd {
    let universal = tgd.universal_variables();
    let order = match naming.mode {
        NamingMode::Naive => {
            let mut order = universal.clone();
            order.extend(tgd.existential_variables());
            order
        }
        NamingMode::Sorted => sorted_order(tgd, &universal),
    };

    let mut next_universal = 0;
    let mut next_existential = 0;
    let renaming: Substitution = order
        .into_iter()
        .map(|v| {
            let renamed = if universal.contains(&v) {
                next_universal += 1;
                Variable::indexed(&naming.universal_prefix, next_universal - 1)
            } else {
                next_existential += 1;
                Variable::indexed(&naming.existential_prefix, next_existential - 1)
            };
            (v, Term::Variable(renamed))
        })
        .collect();
    tgd.apply(&renaming)
}

/// Whether a variable is universal or existential; part of every slot key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Universal,
    Existential,
}

/// Name-independent shape of a term given the numbering so far.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Constant(Constant),
    Function(FunctionSymbol, Vec<Slot>),
    Numbered(Kind, usize),
    Fresh(Kind, usize),
}

struct Numbering<'a> {
    universal: &'a [Variable],
    assigned: HashMap<Variable, (Kind, usize)>,
    next: [usize; 2],
    order: Vec<Variable>,
}

impl Numbering<'_> {
    fn kind(&self, v: &Variable) -> Kind {
        if self.universal.contains(v) {
            Kind::Universal
        } else {
            Kind::Existential
        }
    }

    fn shape(&self, atom: &Atom) -> (String, usize, Vec<Slot>) {
        let mut fresh = Vec::new();
        let slots = atom
            .terms()
            .iter()
            .map(|t| self.slot(t, &mut fresh))
            .collect();
        (
            atom.predicate().name().to_owned(),
            atom.predicate().arity(),
            slots,
        )
    }

    fn slot(&self, term: &Term, fresh: &mut Vec<Variable>) -> Slot {
        match term {
            Term::Variable(v) => {
                if let Some(&(kind, n)) = self.assigned.get(v) {
                    return Slot::Numbered(kind, n);
                }
                let local = fresh.iter().position(|f| f == v).unwrap_or_else(|| {
                    fresh.push(v.clone());
                    fresh.len() - 1
                });
                Slot::Fresh(self.kind(v), local)
            }
            Term::Constant(c) => Slot::Constant(c.clone()),
            Term::Function(f) => Slot::Function(
                f.symbol().clone(),
                f.args().iter().map(|a| self.slot(a, fresh)).collect(),
            ),
        }
    }

    /// Fresh variables of an atom in positional order, for tie-breaking.
    fn fresh_names(&self, atom: &Atom) -> Vec<(Kind, usize, String)> {
        atom.variables()
            .into_iter()
            .filter(|v| !self.assigned.contains_key(v))
            .map(|v| (self.kind(&v), v.name().len(), v.name().to_owned()))
            .collect()
    }

    fn visit(&mut self, atoms: &AtomSet) {
        let mut remaining: Vec<&Atom> = atoms.iter().collect();
        while !remaining.is_empty() {
            let mut best = 0;
            for i in 1..remaining.len() {
                if self.precedes(remaining[i], remaining[best]) {
                    best = i;
                }
            }
            let atom = remaining.swap_remove(best);
            for v in atom.variables() {
                if self.assigned.contains_key(&v) {
                    continue;
                }
                let kind = self.kind(&v);
                let slot = &mut self.next[kind as usize];
                self.assigned.insert(v.clone(), (kind, *slot));
                *slot += 1;
                self.order.push(v);
            }
        }
    }

    fn precedes(&self, a: &Atom, b: &Atom) -> bool {
        match self.shape(a).cmp(&self.shape(b)) {
            Ordering::Less => true,
            Ordering::Greater => false,
            // Same shape: the atom whose fresh variables sort first wins.
            Ordering::Equal => self.fresh_names(a) < self.fresh_names(b),
        }
    }
}

/// Numbering order for the sorted mode.
///
/// Atoms are consumed smallest-first by (predicate, argument shape), where
/// the shape abstracts already-numbered variables to their number and fresh
/// variables to their local occurrence pattern. Ties between equal shapes
/// fall back to the fresh variable names, compared by length and then text,
/// which coincides with numeric order on canonical names. That makes the
/// renaming a fixpoint on its own output.
fn sorted_order(tgd: &Tgd, universal: &[Variable]) -> Vec<Variable> {
    let mut numbering = Numbering {
        universal,
        assigned: HashMap::new(),
        next: [0, 0],
        order: Vec::new(),
    };
    numbering.visit(tgd.head());
    numbering.visit(tgd.body());
    numbering.order
}
