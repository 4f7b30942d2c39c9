//! Explanation trees and per-node outcomes.
//!
//! An explanation tree mirrors the shape of the predicate it was derived
//! from: one node per predicate node, no flattening. Trees are created per
//! explain call and are read-only once returned.

use std::fmt;

use predlens_foundation::Error;

/// The result of evaluating one predicate node against one target.
///
/// Errors are kept distinct from `Unmatched` so a reader can tell
/// "predicate says no" apart from "predicate couldn't be evaluated here".
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The node evaluated to true.
    Matched,
    /// The node evaluated to false.
    Unmatched,
    /// The node could not be evaluated.
    Error(Error),
}

impl Outcome {
    /// Converts a boolean evaluation result.
    #[must_use]
    pub const fn from_bool(matched: bool) -> Self {
        if matched { Self::Matched } else { Self::Unmatched }
    }

    /// Returns the boolean result, or `None` for error outcomes.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Matched => Some(true),
            Self::Unmatched => Some(false),
            Self::Error(_) => None,
        }
    }

    /// Returns true if this outcome is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Logical AND with error propagation.
    ///
    /// Errors absorb: a child that could not be evaluated makes the parent
    /// unevaluable too, never silently false.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Error(e), _) | (_, Self::Error(e)) => Self::Error(e),
            (Self::Matched, Self::Matched) => Self::Matched,
            _ => Self::Unmatched,
        }
    }

    /// Logical OR with error propagation.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Error(e), _) | (_, Self::Error(e)) => Self::Error(e),
            (Self::Unmatched, Self::Unmatched) => Self::Unmatched,
            _ => Self::Matched,
        }
    }

    /// Logical negation; NOT of an error is the same error.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Matched => Self::Unmatched,
            Self::Unmatched => Self::Matched,
            Self::Error(e) => Self::Error(e),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched => write!(f, "true"),
            Self::Unmatched => write!(f, "false"),
            Self::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// One node of an explanation tree.
///
/// Structurally isomorphic to the predicate node it explains; leaves have no
/// children. `outcome` is `None` in describe-only mode, where nothing was
/// evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplanationNode {
    /// The node's one-line rendered form, independent of evaluation.
    pub description: String,
    /// The evaluation result, or `None` when only describing.
    pub outcome: Option<Outcome>,
    /// Child explanations, one per sub-predicate, in display order.
    pub children: Vec<ExplanationNode>,
}

impl ExplanationNode {
    /// Creates a node with the given description, outcome, and children.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        outcome: Option<Outcome>,
        children: Vec<ExplanationNode>,
    ) -> Self {
        Self {
            description: description.into(),
            outcome,
            children,
        }
    }

    /// Creates a leaf node with no children.
    #[must_use]
    pub fn leaf(description: impl Into<String>, outcome: Option<Outcome>) -> Self {
        Self::new(description, outcome, Vec::new())
    }

    /// Returns the boolean result of this node, if it evaluated cleanly.
    #[must_use]
    pub fn matched(&self) -> Option<bool> {
        self.outcome.as_ref().and_then(Outcome::as_bool)
    }

    /// Returns true if this node is in the error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.outcome.as_ref().is_some_and(Outcome::is_error)
    }

    /// Returns the total number of nodes in this tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ExplanationNode::node_count)
            .sum::<usize>()
    }
}
