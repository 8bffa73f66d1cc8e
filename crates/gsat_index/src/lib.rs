//! Subsumption indexing for guarded saturation.
//!
//! A rule `b` subsumes a rule `a` when `b.body ⊆ a.body` and
//! `a.head ⊆ b.head`: `b` needs no more premises and derives at least as
//! much. This crate provides:
//! - [`SubsumptionFilter`] - Candidate pruning ([`ExhaustiveFilter`],
//!   [`PredicateFilter`], [`TrieFilter`])
//! - [`Subsumer`] - Keeps a rule collection subsumption-minimal
//!   ([`FilterSubsumer`], [`ExactAtomSubsumer`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod exact;
pub mod filter;
pub mod subsumer;
pub mod trie;

pub use exact::ExactAtomSubsumer;
pub use filter::{ExhaustiveFilter, Granularity, PredicateFilter, SubsumptionFilter, subsumes};
pub use subsumer::{FilterSubsumer, Subsumer};
pub use trie::TrieFilter;
