//! The atom order that restricts resolution to maximal atoms.
//!
//! Predicates and function symbols are numbered lazily in order of first
//! sight. Atoms compare on:
//! 1. the largest function symbol index among their arguments (function-free
//!    atoms are smallest),
//! 2. the predicate index,
//! 3. the argument position of that function term,
//! 4. the argument terms, lexicographically.
//!
//! The result is a total preorder; [`AtomOrder::maximal`] keeps every atom
//! equal to the maximum.

use std::cmp::Ordering;

use gsat_foundation::{Atom, FunctionSymbol, Numbering, Predicate, Term, Variable};

/// Comparison key for a single term.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum TermKey {
    Variable(Variable),
    Constant(String),
    Function(u32, Vec<TermKey>),
}

/// Comparison key for an atom; the derived order is the atom order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct AtomKey {
    function: Option<u32>,
    predicate: u32,
    position: Option<usize>,
    terms: Vec<TermKey>,
}

/// Lazily numbered total preorder over atoms.
#[derive(Clone, Debug, Default)]
pub struct AtomOrder {
    predicates: Numbering<Predicate>,
    functions: Numbering<FunctionSymbol>,
}

impl AtomOrder {
    /// Creates an order with no symbols numbered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares two atoms.
    pub fn compare(&mut self, a: &Atom, b: &Atom) -> Ordering {
        let ka = self.key(a);
        let kb = self.key(b);
        ka.cmp(&kb)
    }

    /// Returns the atoms that no other atom exceeds, in input order.
    pub fn maximal(&mut self, atoms: &[Atom]) -> Vec<Atom> {
        let keys: Vec<AtomKey> = atoms.iter().map(|a| self.key(a)).collect();
        let Some(max) = keys.iter().max() else {
            return Vec::new();
        };
        atoms
            .iter()
            .zip(&keys)
            .filter(|(_, k)| *k == max)
            .map(|(a, _)| a.clone())
            .collect()
    }

    /// Returns how many predicates have been numbered.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Returns how many function symbols have been numbered.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    fn key(&mut self, atom: &Atom) -> AtomKey {
        let predicate = self.predicates.number(atom.predicate());

        let mut function = None;
        let mut position = None;
        for (i, f) in atom.function_terms() {
            let idx = self.functions.number(f.symbol());
            if function.is_none_or(|best| idx > best) {
                function = Some(idx);
                position = Some(i);
            }
        }

        let terms = atom.terms().iter().map(|t| self.term_key(t)).collect();
        AtomKey {
            function,
            predicate,
            position,
            terms,
        }
    }

    fn term_key(&mut self, term: &Term) -> TermKey {
        match term {
            Term::Variable(v) => TermKey::Variable(v.clone()),
            Term::Constant(c) => TermKey::Constant(c.name().to_owned()),
            Term::Function(f) => {
                let idx = self.functions.number(f.symbol());
                let args = f.args().iter().map(|a| self.term_key(a)).collect();
                TermKey::Function(idx, args)
            }
        }
    }
}
