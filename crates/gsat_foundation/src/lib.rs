//! Core types for guarded saturation.
//!
//! This crate provides:
//! - [`Term`], [`Variable`], [`Constant`], [`FunctionTerm`] - The term language
//! - [`Predicate`] and [`Atom`] - Relational atoms
//! - [`AtomSet`] - Persistent, ordered atom sets used as rule bodies and heads
//! - [`Substitution`] - Variable bindings with representative chasing
//! - [`Numbering`] - First-seen integer numbering for symbols
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod collections;
pub mod error;
pub mod intern;
pub mod substitution;
pub mod symbol;
pub mod term;

pub use atom::Atom;
pub use collections::AtomSet;
pub use error::{Error, ErrorContext, ErrorKind};
pub use intern::Numbering;
pub use substitution::Substitution;
pub use symbol::{Constant, FunctionSymbol, Predicate, Variable};
pub use term::{FunctionTerm, Term};

/// Result type alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;
