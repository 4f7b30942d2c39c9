//! Predicate trees for the Predlens explain engine.
//!
//! This crate provides:
//! - [`Predicate`] - Immutable boolean expression trees (compound,
//!   comparison, opaque)
//! - [`PredicateShape`] - Pure structural classification of a predicate node
//! - [`Bindings`] - Substitution values for `$NAME` placeholders
//! - Human-readable descriptions via `Display` on every node type

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod bindings;
pub mod pretty;
pub mod shape;

pub use ast::{
    ComparisonOperator, ComparisonPredicate, CompoundOperator, CompoundPredicate, NativeEval,
    OpaquePredicate, Operand, Predicate,
};
pub use bindings::Bindings;
pub use shape::PredicateShape;
