//! The input contract: dependencies as produced by an upstream parser.
//!
//! Parsers hand over plain body/head atom lists. Validation rejects contract
//! violations with [`ErrorKind::MalformedInput`](gsat_foundation::ErrorKind)
//! or an arity mismatch; guardedness is checked later and only discards the
//! offending dependency.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gsat_foundation::{Atom, Error, ErrorContext, Result, Variable};

use crate::tgd::Tgd;

/// A parsed dependency `body → ∃ existentials. head`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dependency {
    /// Body atoms (conjunction).
    pub body: Vec<Atom>,
    /// Head atoms (conjunction).
    pub head: Vec<Atom>,
    /// Existential variables, if the source format declares them explicitly.
    pub existentials: Vec<Variable>,
}

impl Dependency {
    /// Creates a dependency without declared existentials.
    #[must_use]
    pub fn new(body: Vec<Atom>, head: Vec<Atom>) -> Self {
        Self {
            body,
            head,
            existentials: Vec::new(),
        }
    }

    /// Sets the declared existential variables.
    #[must_use]
    pub fn with_existentials(mut self, existentials: Vec<Variable>) -> Self {
        self.existentials = existentials;
        self
    }

    /// Returns true if this is a tuple-generating dependency (non-empty head).
    #[must_use]
    pub fn is_tgd(&self) -> bool {
        !self.head.is_empty()
    }

    /// Checks the input contract for this dependency alone.
    ///
    /// # Errors
    /// Returns a malformed input error if an atom contains a function term or
    /// a declared existential variable occurs in the body.
    pub fn validate(&self) -> Result<()> {
        if let Some(atom) = self
            .body
            .iter()
            .chain(self.head.iter())
            .find(|a| a.is_functional())
        {
            return Err(Error::malformed_input(format!(
                "function term in input atom {atom}"
            )));
        }
        if let Some(var) = self
            .existentials
            .iter()
            .find(|v| self.body.iter().any(|a| a.mentions(v)))
        {
            return Err(Error::malformed_input(format!(
                "existential variable {var} also occurs in the body"
            )));
        }
        Ok(())
    }

    /// Converts to a rule value.
    #[must_use]
    pub fn to_tgd(&self) -> Tgd {
        Tgd::from_atoms(self.body.iter().cloned(), self.head.iter().cloned())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tgd())
    }
}

/// Validates every dependency and checks that each predicate name is used
/// with a single arity across the whole input.
///
/// # Errors
/// Returns the first contract violation, with the offending input position
/// attached as context.
pub fn check_arities(dependencies: &[Dependency]) -> Result<()> {
    let mut arities: HashMap<Arc<str>, usize> = HashMap::new();

    for (index, dependency) in dependencies.iter().enumerate() {
        let context = || {
            ErrorContext::new()
                .with_input_index(index)
                .with_dependency(dependency.to_string())
        };

        dependency.validate().map_err(|e| {
            e.with_context(
                context()
                    .with_frame("Dependency::validate")
                    .with_frame("check_arities"),
            )
        })?;

        for atom in dependency.body.iter().chain(dependency.head.iter()) {
            let predicate = atom.predicate();
            let expected = *arities
                .entry(Arc::from(predicate.name()))
                .or_insert(predicate.arity());
            if expected != predicate.arity() {
                return Err(
                    Error::arity_mismatch(predicate.name(), expected, predicate.arity())
                        .with_context(context().with_frame("check_arities")),
                );
            }
        }
    }

    Ok(())
}
