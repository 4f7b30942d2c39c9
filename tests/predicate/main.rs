//! Integration tests for Layer 1: Predicate
//!
//! Tests for predicate construction, decomposition, bindings, and
//! pretty-printing.

mod printing;
