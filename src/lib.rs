//! gsat - Guarded saturation
//!
//! This crate re-exports all layers of the gsat system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: gsat_engine     — Saturation loop, evolve, skolem resolution
//! Layer 2: gsat_unify      — Most general unifiers, unification indexes
//!          gsat_index      — Subsumption filters and subsumers
//! Layer 1: gsat_rules      — TGDs, normal forms, skolemization, rule arena
//! Layer 0: gsat_foundation — Core types (Term, Atom, Substitution, Error)
//! ```

pub use gsat_engine as engine;
pub use gsat_foundation as foundation;
pub use gsat_index as index;
pub use gsat_rules as rules;
pub use gsat_unify as unify;
