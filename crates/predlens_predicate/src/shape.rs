//! Structural classification of predicate nodes.
//!
//! Decomposition is pure and total: every predicate node, including kinds
//! the engine does not specially recognize, classifies into exactly one
//! shape. No evaluation happens here.

use crate::ast::{
    ComparisonOperator, CompoundOperator, NativeEval, Operand, Predicate,
};

/// The decomposed shape of a single predicate node.
///
/// Borrows from the predicate; classification never copies the tree.
#[derive(Debug)]
pub enum PredicateShape<'a> {
    /// A logical AND/OR/NOT with its ordered operand list.
    Compound {
        /// The logical operator.
        operator: CompoundOperator,
        /// The sub-predicates, in display order.
        operands: &'a [Predicate],
    },
    /// A binary comparison with left operand, operator, and right operand.
    Comparison {
        /// Left-hand operand, literal or reference.
        left: &'a Operand,
        /// The relational operator.
        operator: ComparisonOperator,
        /// Right-hand operand, literal or reference.
        right: &'a Operand,
    },
    /// An unrecognized kind; evaluated monolithically, never given children.
    Opaque {
        /// The node's rendered form.
        description: &'a str,
        /// The native evaluation capability.
        eval: &'a NativeEval,
    },
}

impl Predicate {
    /// Classifies this node into its shape.
    ///
    /// Deterministic and total: one shape per node, operand order preserved.
    #[must_use]
    pub fn shape(&self) -> PredicateShape<'_> {
        match self {
            Self::Compound(compound) => PredicateShape::Compound {
                operator: compound.operator,
                operands: &compound.operands,
            },
            Self::Comparison(comparison) => PredicateShape::Comparison {
                left: &comparison.left,
                operator: comparison.operator,
                right: &comparison.right,
            },
            Self::Opaque(opaque) => PredicateShape::Opaque {
                description: &opaque.description,
                eval: &opaque.eval,
            },
        }
    }
}
