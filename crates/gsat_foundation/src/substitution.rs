//! Substitutions from variables to terms.
//!
//! A substitution may bind a variable to another bound variable; unifiers are
//! built that way. [`Substitution::find`] chases bindings to the final
//! representative and compresses the path into the map, while
//! [`Substitution::apply_term`] performs one simultaneous replacement step.
//! Call [`Substitution::normalized`] to obtain an idempotent substitution
//! before applying a chained one.

use std::collections::HashMap;
use std::fmt;

use crate::atom::Atom;
use crate::collections::AtomSet;
use crate::symbol::Variable;
use crate::term::Term;

/// A finite mapping from variables to terms.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<Variable, Term>,
}

impl Substitution {
    /// Creates an empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the direct binding of a variable.
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Returns true if the variable is bound.
    #[must_use]
    pub fn binds(&self, var: &Variable) -> bool {
        self.bindings.contains_key(var)
    }

    /// Binds a variable, replacing any previous binding.
    pub fn bind(&mut self, var: Variable, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Iterates the direct bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter()
    }

    /// Resolves a term to its representative, compressing the chase path.
    ///
    /// Non-variable terms and unbound variables are their own representative.
    /// The step count is bounded by the map size, so a cyclic renaming map
    /// terminates instead of looping.
    pub fn find(&mut self, term: &Term) -> Term {
        let mut path = Vec::new();
        let mut current = term.clone();
        while let Term::Variable(v) = &current {
            let Some(next) = self.bindings.get(v) else {
                break;
            };
            if path.len() > self.bindings.len() {
                break;
            }
            path.push(v.clone());
            current = next.clone();
        }
        // Point every variable on the path straight at the representative.
        if path.len() > 1 {
            for var in path {
                self.bindings.insert(var, current.clone());
            }
        }
        current
    }

    /// Resolves a term to its representative without modifying the map.
    #[must_use]
    pub fn resolve(&self, term: &Term) -> Term {
        let mut current = term;
        let mut steps = 0;
        while let Term::Variable(v) = current {
            match self.bindings.get(v) {
                Some(next) if steps <= self.bindings.len() => {
                    current = next;
                    steps += 1;
                }
                _ => break,
            }
        }
        current.clone()
    }

    /// Fully resolves a term, including the arguments of function terms.
    #[must_use]
    pub fn resolve_deep(&self, term: &Term) -> Term {
        match self.resolve(term) {
            Term::Function(f) => {
                let args = f.args().iter().map(|a| self.resolve_deep(a)).collect();
                Term::Function(f.with_args(args))
            }
            other => other,
        }
    }

    /// Returns an idempotent substitution with every binding fully resolved.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let bindings = self
            .bindings
            .keys()
            .map(|v| (v.clone(), self.resolve_deep(&Term::Variable(v.clone()))))
            .filter(|(v, t)| t.as_variable() != Some(v))
            .collect();
        Self { bindings }
    }

    /// Applies one simultaneous replacement step to a term.
    #[must_use]
    pub fn apply_term(&self, term: &Term) -> Term {
        match term {
            Term::Variable(v) => self.bindings.get(v).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
            Term::Function(f) => {
                let args = f.args().iter().map(|a| self.apply_term(a)).collect();
                Term::Function(f.with_args(args))
            }
        }
    }

    /// Applies the substitution to an atom.
    #[must_use]
    pub fn apply_atom(&self, atom: &Atom) -> Atom {
        if self.is_empty() {
            return atom.clone();
        }
        atom.with_terms(atom.terms().iter().map(|t| self.apply_term(t)).collect())
    }

    /// Applies the substitution to every atom of a set.
    #[must_use]
    pub fn apply_set(&self, atoms: &AtomSet) -> AtomSet {
        atoms.iter().map(|a| self.apply_atom(a)).collect()
    }
}

impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort();
        f.debug_map().entries(entries).finish()
    }
}
