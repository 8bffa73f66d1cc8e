//! Unification for guarded saturation.
//!
//! This crate provides:
//! - [`most_general_unifier`] - Atom unification that refuses to nest function terms
//! - [`variable_substitution`] - Positional unification of two atom lists
//! - [`UnificationIndex`] - Retrieval of rules holding potentially unifiable atoms
//! - [`PredicateUnificationIndex`] and [`PathIndex`] - The two index implementations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod mgu;
pub mod path;

pub use index::{PredicateUnificationIndex, UnificationIndex};
pub use mgu::{most_general_unifier, unify_terms, variable_substitution};
pub use path::PathIndex;
