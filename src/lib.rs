//! Predlens - Predicate evaluation tracing and explanation
//!
//! This crate re-exports all layers of the Predlens system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: predlens_report     — Rendering, batch runs, aggregate summaries
//! Layer 2: predlens_engine     — Evaluation, explanation trees, path resolution
//! Layer 1: predlens_predicate  — Predicate AST, bindings, pretty-printing
//! Layer 0: predlens_foundation — Core types (Value, Target, AttributePath, Error)
//! ```

pub use predlens_engine as engine;
pub use predlens_foundation as foundation;
pub use predlens_predicate as predicate;
pub use predlens_report as report;

pub use predlens_report::{explain, explain_collection, explain_object, ExplainOptions};
