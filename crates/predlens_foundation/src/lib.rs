//! Core types for the Predlens explain engine.
//!
//! This crate provides:
//! - [`Value`] - The value type predicates are evaluated over
//! - [`AttributePath`] - Dotted key paths used to read values off targets
//! - [`Target`] - The attribute-resolution capability implemented by targets
//! - [`Error`] - Rich error types for resolution and evaluation failures
//! - Persistent collections ([`PlVec`], [`PlMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod path;
pub mod target;
pub mod value;

pub use collections::{PlMap, PlVec};
pub use error::{Error, ErrorKind};
pub use path::AttributePath;
pub use target::Target;
pub use value::Value;

/// Convenient result alias for Predlens operations.
pub type Result<T> = std::result::Result<T, Error>;
