//! Integration tests for Layer 3: Engine
//!
//! Tests for end-to-end saturation: derived rules, strategy independence,
//! input filtering, timeouts, and output invariants.

mod invariants;
mod saturation;
