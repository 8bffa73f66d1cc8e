//! Integration tests for Layer 1: Rules
//!
//! Tests for the input contract, guards, normal forms, skolemization, and
//! the rule arena.

mod contract;
mod normal_forms;
mod skolemization;
