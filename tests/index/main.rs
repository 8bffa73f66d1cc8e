//! Integration tests for Layer 2: Subsumption
//!
//! Tests for subsumption filters and the subsumers built on them.

mod subsumers;
