//! Path index over argument positions.
//!
//! Each stored atom is filed under one key per path from the predicate to a
//! leaf symbol: the predicate itself, the top-level symbol at every argument
//! position, and the symbol at every argument of a function term. Variables
//! are recorded as a wildcard symbol. A query keeps, per position, the rules
//! whose symbol there matches the query's or is a wildcard.
//!
//! Results over-approximate: two positions may be satisfied by different
//! atoms of the same rule.

use std::collections::BTreeSet;

use gsat_foundation::{Atom, Constant, FunctionSymbol, FunctionTerm, Predicate, Term};
use gsat_rules::RuleId;

use crate::index::{Postings, UnificationIndex};

/// Symbol seen at the end of a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum PathSymbol {
    Variable,
    Constant(Constant),
    Function(FunctionSymbol),
}

impl PathSymbol {
    fn of(term: &Term) -> Self {
        match term {
            Term::Variable(_) => Self::Variable,
            Term::Constant(c) => Self::Constant(c.clone()),
            Term::Function(f) => Self::Function(f.symbol().clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum PathKey {
    Root(Predicate),
    Argument {
        predicate: Predicate,
        position: usize,
        symbol: PathSymbol,
    },
    Inner {
        predicate: Predicate,
        position: usize,
        function: FunctionSymbol,
        argument: usize,
        symbol: PathSymbol,
    },
}

/// Unification index keyed on symbol paths.
#[derive(Clone, Debug, Default)]
pub struct PathIndex {
    postings: Postings<PathKey>,
}

impl PathIndex {
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

    fn keys(atom: &Atom) -> Vec<PathKey> {
        let predicate = atom.predicate();
        let mut keys = vec![PathKey::Root(predicate.clone())];
        for (position, term) in atom.terms().iter().enumerate() {
            keys.push(PathKey::Argument {
                predicate: predicate.clone(),
                position,
                symbol: PathSymbol::of(term),
            });
            if let Term::Function(f) = term {
                for (argument, inner) in f.args().iter().enumerate() {
                    keys.push(PathKey::Inner {
                        predicate: predicate.clone(),
                        position,
                        function: f.symbol().clone(),
                        argument,
                        symbol: PathSymbol::of(inner),
                    });
                }
            }
        }
        keys
    }

    /// Rules whose argument at `position` may unify with `term`, or `None`
    /// if the position does not constrain the result.
    fn position_candidates(
        &self,
        predicate: &Predicate,
        position: usize,
        term: &Term,
    ) -> Option<BTreeSet<RuleId>> {
        let argument = |symbol| PathKey::Argument {
            predicate: predicate.clone(),
            position,
            symbol,
        };
        let mut ids = match term {
            Term::Variable(_) => return None,
            Term::Constant(_) => self.postings.ids(&argument(PathSymbol::of(term))),
            Term::Function(f) => self.function_candidates(predicate, position, f),
        };
        ids.extend(self.postings.ids(&argument(PathSymbol::Variable)));
        Some(ids)
    }

    fn function_candidates(
        &self,
        predicate: &Predicate,
        position: usize,
        f: &FunctionTerm,
    ) -> BTreeSet<RuleId> {
        let mut ids = self.postings.ids(&PathKey::Argument {
            predicate: predicate.clone(),
            position,
            symbol: PathSymbol::Function(f.symbol().clone()),
        });
        for (argument, inner) in f.args().iter().enumerate() {
            if ids.is_empty() {
                break;
            }
            if inner.is_variable() {
                continue;
            }
            let inner_key = |symbol| PathKey::Inner {
                predicate: predicate.clone(),
                position,
                function: f.symbol().clone(),
                argument,
                symbol,
            };
            let mut matching = self.postings.ids(&inner_key(PathSymbol::of(inner)));
            matching.extend(self.postings.ids(&inner_key(PathSymbol::Variable)));
            ids.retain(|id| matching.contains(id));
        }
        ids
    }
}

impl UnificationIndex for PathIndex {
    fn insert(&mut self, id: RuleId, atom: &Atom) {
        for key in Self::keys(atom) {
            self.postings.add(key, id);
        }
    }

    fn remove(&mut self, id: RuleId, atom: &Atom) {
        for key in Self::keys(atom) {
            self.postings.remove(&key, id);
        }
    }

    fn candidates(&self, atom: &Atom) -> Vec<RuleId> {
        let predicate = atom.predicate();
        let mut ids = self.postings.ids(&PathKey::Root(predicate.clone()));
        for (position, term) in atom.terms().iter().enumerate() {
            if ids.is_empty() {
                break;
            }
            if let Some(matching) = self.position_candidates(predicate, position, term) {
                ids.retain(|id| matching.contains(id));
            }
        }
        ids.into_iter().collect()
    }

    fn clear(&mut self) {
        self.postings.clear();
    }
}
