//! Predicate evaluation producing explanation trees.
//!
//! This crate provides:
//! - [`resolve_path`] - Attribute path resolution against arbitrary targets
//! - [`Outcome`] - Per-node boolean or error results
//! - [`ExplanationNode`] - The per-call explanation tree
//! - [`describe`] / [`evaluate`] - Recursive decomposition with and without
//!   a target

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluate;
pub mod node;
pub mod resolve;

pub use evaluate::{describe, evaluate};
pub use node::{ExplanationNode, Outcome};
pub use resolve::resolve_path;
