//! Rendering and batch orchestration for Predlens explanations.
//!
//! This crate provides:
//! - [`ExplainFormatter`] - Indented text rendering of explanation trees
//! - [`AggregateSummary`] - Collection-level match/mismatch/error counts
//! - [`ExplainOptions`] - Explicit configuration for batch runs
//! - [`explain`] / [`explain_object`] / [`explain_collection`] - The public
//!   call shapes
//! - [`tree_description`] - A generic depth-first printer for arbitrary
//!   parent/child object graphs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod explain;
pub mod format;
pub mod summary;
pub mod tree;

pub use batch::explain_collection;
pub use config::ExplainOptions;
pub use explain::{explain, explain_object};
pub use format::ExplainFormatter;
pub use summary::AggregateSummary;
pub use tree::tree_description;
