//! Relational atoms.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::{Predicate, Variable};
use crate::term::{FunctionTerm, Term};
use crate::{Error, Result};

/// A predicate applied to a list of terms whose length equals the arity.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom {
    predicate: Predicate,
    terms: Arc<[Term]>,
}

impl Atom {
    /// Creates an atom.
    ///
    /// # Errors
    /// Returns an arity mismatch if the term count differs from the predicate arity.
    pub fn new(predicate: Predicate, terms: Vec<Term>) -> Result<Self> {
        if predicate.arity() != terms.len() {
            return Err(Error::arity_mismatch(
                predicate.name(),
                predicate.arity(),
                terms.len(),
            ));
        }
        Ok(Self {
            predicate,
            terms: terms.into(),
        })
    }

    /// Creates an atom whose predicate arity is taken from the term count.
    #[must_use]
    pub fn from_parts(name: impl Into<Arc<str>>, terms: Vec<Term>) -> Self {
        Self {
            predicate: Predicate::new(name, terms.len()),
            terms: terms.into(),
        }
    }

    /// Creates an atom over variables named by `vars`.
    #[must_use]
    pub fn over_variables(name: impl Into<Arc<str>>, vars: &[Variable]) -> Self {
        Self::from_parts(name, vars.iter().cloned().map(Term::Variable).collect())
    }

    /// Returns the falsity atom `⊥`.
    #[must_use]
    pub fn bottom() -> Self {
        Self {
            predicate: Predicate::bottom(),
            terms: Arc::from(Vec::new()),
        }
    }

    /// Rebuilds this atom over new terms of the same length.
    #[must_use]
    pub fn with_terms(&self, terms: Vec<Term>) -> Self {
        debug_assert_eq!(terms.len(), self.terms.len());
        Self {
            predicate: self.predicate.clone(),
            terms: terms.into(),
        }
    }

    /// Returns the predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns the argument terms.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the falsity atom.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        self.predicate.is_bottom()
    }

    /// Returns the variables of this atom in order of first occurrence.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Appends the variables of this atom to `out`, skipping ones already present.
    pub fn collect_variables(&self, out: &mut Vec<Variable>) {
        for term in self.terms.iter() {
            term.collect_variables(out);
        }
    }

    /// Returns true if `var` occurs in this atom.
    #[must_use]
    pub fn mentions(&self, var: &Variable) -> bool {
        self.terms.iter().any(|t| t.mentions(var))
    }

    /// Returns true if any argument is a function term.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        self.terms.iter().any(Term::is_function)
    }

    /// Returns the function-term arguments together with their positions.
    pub fn function_terms(&self) -> impl Iterator<Item = (usize, &FunctionTerm)> {
        self.terms
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_function().map(|f| (i, f)))
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.predicate);
        }
        write!(f, "{}(", self.predicate)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, ")")
    }
}
