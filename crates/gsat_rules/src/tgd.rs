//! Tuple-generating dependencies as immutable values.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gsat_foundation::{Atom, AtomSet, Substitution, Term, Variable};

/// A rule `body → ∃ existentials. head`.
///
/// Universally quantified variables are the body variables; existential
/// variables are head variables that do not occur in the body. Equality and
/// hashing are structural on the (body set, head set) pair.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tgd {
    body: AtomSet,
    head: AtomSet,
}

impl Tgd {
    /// Creates a rule from body and head sets.
    #[must_use]
    pub fn new(body: AtomSet, head: AtomSet) -> Self {
        Self { body, head }
    }

    /// Creates a rule from atom iterators.
    #[must_use]
    pub fn from_atoms(
        body: impl IntoIterator<Item = Atom>,
        head: impl IntoIterator<Item = Atom>,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            head: head.into_iter().collect(),
        }
    }

    /// Returns the body atoms.
    #[must_use]
    pub fn body(&self) -> &AtomSet {
        &self.body
    }

    /// Returns the head atoms.
    #[must_use]
    pub fn head(&self) -> &AtomSet {
        &self.head
    }

    /// Returns the universally quantified (body) variables in order of first occurrence.
    #[must_use]
    pub fn universal_variables(&self) -> Vec<Variable> {
        self.body.variables()
    }

    /// Returns the existential variables in order of first occurrence in the head.
    #[must_use]
    pub fn existential_variables(&self) -> Vec<Variable> {
        let universal = self.universal_variables();
        self.head
            .variables()
            .into_iter()
            .filter(|v| !universal.contains(v))
            .collect()
    }

    /// Returns the body variables that also occur in the head.
    #[must_use]
    pub fn frontier(&self) -> Vec<Variable> {
        let head = self.head.variables();
        self.universal_variables()
            .into_iter()
            .filter(|v| head.contains(v))
            .collect()
    }

    /// Returns true if the head has no existential variables.
    #[must_use]
    pub fn is_full(&self) -> bool {
        let universal = self.universal_variables();
        self.head.variables().iter().all(|v| universal.contains(v))
    }

    /// Returns true if no atom contains a function term.
    #[must_use]
    pub fn is_function_free(&self) -> bool {
        !self.body.is_functional() && !self.head.is_functional()
    }

    /// Returns true if the head is exactly `{⊥}`.
    #[must_use]
    pub fn is_negative_constraint(&self) -> bool {
        self.head.is_bottom()
    }

    /// Returns true if some term anywhere in the rule nests a function term.
    #[must_use]
    pub fn has_nested_terms(&self) -> bool {
        self.body
            .iter()
            .chain(self.head.iter())
            .any(|a| a.terms().iter().any(Term::is_nested))
    }

    /// Applies a substitution to body and head.
    #[must_use]
    pub fn apply(&self, sub: &Substitution) -> Self {
        Self {
            body: sub.apply_set(&self.body),
            head: sub.apply_set(&self.head),
        }
    }

    /// Renames every variable to `{prefix}{n}`, numbering in order of first
    /// occurrence and skipping names that occur in `other`.
    ///
    /// Used to rename a rule apart from `other` before resolving them.
    #[must_use]
    pub fn rename_apart(&self, prefix: &str, other: &Tgd) -> Self {
        self.apply(&self.renaming_apart(prefix, other))
    }

    /// Returns the renaming applied by [`Tgd::rename_apart`].
    #[must_use]
    pub fn renaming_apart(&self, prefix: &str, other: &Tgd) -> Substitution {
        let taken: BTreeSet<Variable> = other
            .universal_variables()
            .into_iter()
            .chain(other.existential_variables())
            .collect();
        let fresh = (0..)
            .map(|i| Variable::indexed(prefix, i))
            .filter(|v| !taken.contains(v));

        let mut vars = self.universal_variables();
        vars.extend(self.existential_variables());
        vars.into_iter()
            .zip(fresh)
            .map(|(v, z)| (v, Term::Variable(z)))
            .collect()
    }
}

impl fmt::Debug for Tgd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Tgd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → ", self.body)?;
        let existentials = self.existential_variables();
        if !existentials.is_empty() {
            write!(f, "∃")?;
            for (i, v) in existentials.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, ". ")?;
        }
        write!(f, "{}", self.head)
    }
}
