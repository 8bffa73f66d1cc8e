//! Guarded saturation engine.
//!
//! This crate provides:
//! - [`Saturator`] - The fixpoint loop turning guarded rules into Datalog
//! - [`SaturationConfig`] - Algorithm and index selection, timeout, seed shuffling
//! - [`Saturation`] - The resulting full rules with outcome and statistics
//! - [`evolve`] and [`resolve`] - The single inference steps
//!
//! # Example
//!
//! ```
//! use gsat_engine::{SaturationConfig, Saturator};
//! use gsat_foundation::{Atom, Term};
//! use gsat_rules::Dependency;
//!
//! let atom = |name: &str, vars: &[&str]| {
//!     Atom::from_parts(name, vars.iter().map(|v| Term::var(*v)).collect())
//! };
//! let input = vec![
//!     Dependency::new(vec![atom("A", &["x"])], vec![atom("R", &["x", "y"])]),
//!     Dependency::new(vec![atom("R", &["x", "y"])], vec![atom("B", &["x"])]),
//! ];
//!
//! let saturation = Saturator::new(SaturationConfig::default()).run(&input).unwrap();
//! assert!(saturation.is_complete());
//! assert_eq!(saturation.full_rules.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod calculus;
pub mod config;
pub mod evolve;
pub mod resolve;
pub mod result;
pub mod saturate;

pub use config::{Algorithm, SaturationConfig, SubsumptionStrategy, UnificationStrategy};
pub use evolve::evolve;
pub use resolve::resolve;
pub use result::{Saturation, SaturationOutcome, SaturationStats};
pub use saturate::Saturator;
