//! Persistent atom sets with structural sharing.
//!
//! A thin wrapper around `im::OrdSet`: cloning is O(1), iteration order is
//! the structural atom order, and equality/hashing are set-based. Rule bodies
//! and heads are `AtomSet`s, so two rules are structurally equal exactly when
//! their body and head sets are equal.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::symbol::Variable;

/// Persistent ordered set of atoms.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtomSet(im::OrdSet<Atom>);

impl AtomSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Creates a set with a single atom.
    #[must_use]
    pub fn unit(atom: Atom) -> Self {
        Self(im::OrdSet::unit(atom))
    }

    /// Returns the number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the atom.
    #[must_use]
    pub fn contains(&self, atom: &Atom) -> bool {
        self.0.contains(atom)
    }

    /// Returns a new set with the atom inserted.
    #[must_use]
    pub fn insert(&self, atom: Atom) -> Self {
        let mut new = self.0.clone();
        new.insert(atom);
        Self(new)
    }

    /// Returns a new set with the atom removed.
    #[must_use]
    pub fn remove(&self, atom: &Atom) -> Self {
        let mut new = self.0.clone();
        new.remove(atom);
        Self(new)
    }

    /// Returns an iterator over the atoms in structural order.
    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.0.iter()
    }

    /// Returns the smallest atom in structural order.
    #[must_use]
    pub fn first(&self) -> Option<&Atom> {
        self.0.get_min()
    }

    /// Returns a new set that is the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.clone().union(other.0.clone()))
    }

    /// Returns a new set that is the difference of this set and another.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.clone().relative_complement(other.0.clone()))
    }

    /// Returns true if every atom of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|a| other.contains(a))
    }

    /// Returns the variables of all atoms in order of first occurrence.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        for atom in self.iter() {
            atom.collect_variables(&mut vars);
        }
        vars
    }

    /// Returns true if any atom contains a function term.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        self.iter().any(Atom::is_functional)
    }

    /// Returns true if the set is exactly `{⊥}`.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        self.len() == 1 && self.iter().all(Atom::is_bottom)
    }
}

impl fmt::Debug for AtomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for AtomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "⊤");
        }
        for (i, atom) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl FromIterator<Atom> for AtomSet {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a AtomSet {
    type Item = &'a Atom;
    type IntoIter = im::ordset::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
