//! Rule model and normalization for guarded saturation.
//!
//! This crate provides:
//! - [`Tgd`] - An immutable rule value (body set, head set)
//! - [`Dependency`] - The input contract handed over by parsers
//! - [`Rule`] - A rule with its guard and capability [`Tier`]
//! - [`RuleArena`] - Canonicalizing rule interning with [`RuleId`] handles
//! - [`normalize`] - Head and variable normal forms
//! - [`Skolemizer`] - Skolemization and single-head splitting
//! - [`AtomOrder`] - The atom order used to select maximal atoms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod dependency;
pub mod normalize;
pub mod order;
pub mod rule;
pub mod skolem;
pub mod tgd;

pub use arena::{Interned, RuleArena, RuleId};
pub use dependency::{Dependency, check_arities};
pub use normalize::{NamingMode, VariableNaming, hnf, strip_tautology, vnf};
pub use order::AtomOrder;
pub use rule::{Rule, Selection, Side, SkolemFeatures, Tier, compute_guard};
pub use skolem::Skolemizer;
pub use tgd::Tgd;
