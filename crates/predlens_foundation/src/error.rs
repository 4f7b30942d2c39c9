//! Error types for the Predlens system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Most errors here never escape an explain call: resolution and binding
//! failures are captured as error nodes inside the explanation tree so that
//! sibling branches still get evaluated. Only a malformed predicate shape is
//! surfaced to the caller as a hard failure.

use thiserror::Error;

use crate::path::AttributePath;

/// The main error type for Predlens operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown attribute error naming the failing segment.
    #[must_use]
    pub fn unknown_attribute(segment: impl Into<String>, path: &AttributePath) -> Self {
        Self::new(ErrorKind::UnknownAttribute {
            segment: segment.into(),
            path: path.to_string(),
        })
    }

    /// Creates a missing binding error for a substitution placeholder.
    #[must_use]
    pub fn missing_binding(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingBinding { name: name.into() })
    }

    /// Creates a malformed predicate error.
    #[must_use]
    pub fn malformed_predicate(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPredicate {
            reason: reason.into(),
        })
    }

    /// Creates a native evaluation error for an opaque predicate.
    #[must_use]
    pub fn native_eval(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NativeEval {
            message: message.into(),
        })
    }

    /// Returns true if this error indicates a structurally invalid predicate.
    ///
    /// Malformed predicates are the one condition reported to the caller as
    /// a hard failure instead of being embedded in the explanation tree.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedPredicate { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// An attribute path references an attribute the target does not support.
    #[error("unknown attribute \"{segment}\" in path \"{path}\"")]
    UnknownAttribute {
        /// The path segment that failed to resolve.
        segment: String,
        /// The full dotted path being resolved.
        path: String,
    },

    /// A substitution placeholder has no corresponding binding.
    #[error("missing binding for ${name}")]
    MissingBinding {
        /// The placeholder name that was not bound.
        name: String,
    },

    /// The predicate itself is structurally invalid.
    #[error("malformed predicate: {reason}")]
    MalformedPredicate {
        /// Description of the structural problem.
        reason: String,
    },

    /// Native evaluation of an opaque predicate failed.
    #[error("native evaluation failed: {message}")]
    NativeEval {
        /// Description of the native failure.
        message: String,
    },
}
