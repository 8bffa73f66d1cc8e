//! Integration tests for Layer 2: Unification
//!
//! Tests for most general unifiers and unification partner indexes.

mod unifiers;
