//! Human-readable descriptions for predicate nodes.
//!
//! Every node type renders to a one-line description independent of any
//! target, so a predicate can be displayed even in describe-only mode.
//! Compound AND/OR nodes parenthesize themselves; NOT prefixes its operand.
//!
//! # Example
//!
//! ```
//! use predlens_predicate::{ComparisonOperator, Operand, Predicate};
//!
//! let p = Predicate::and(vec![
//!     Predicate::cmp(
//!         Operand::key_path("age"),
//!         ComparisonOperator::Gt,
//!         Operand::literal(18),
//!     ),
//!     Predicate::cmp(
//!         Operand::key_path("name"),
//!         ComparisonOperator::Eq,
//!         Operand::literal("Alice"),
//!     ),
//! ]);
//! assert_eq!(p.to_string(), "(age > 18 AND name == \"Alice\")");
//! ```

use std::fmt;

use crate::ast::{
    ComparisonOperator, ComparisonPredicate, CompoundOperator, CompoundPredicate, OpaquePredicate,
    Operand, Predicate,
};

impl fmt::Display for CompoundOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Not => write!(f, "NOT"),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "=="),
            Self::Ne => write!(f, "!="),
            Self::Lt => write!(f, "<"),
            Self::Le => write!(f, "<="),
            Self::Gt => write!(f, ">"),
            Self::Ge => write!(f, ">="),
            Self::In => write!(f, "IN"),
            Self::Contains => write!(f, "CONTAINS"),
            Self::BeginsWith => write!(f, "BEGINSWITH"),
            Self::EndsWith => write!(f, "ENDSWITH"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug form quotes strings, so literals read as written
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::KeyPath(path) => write!(f, "{path}"),
            Self::Placeholder(name) => write!(f, "${name}"),
        }
    }
}

impl fmt::Display for ComparisonPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl fmt::Display for CompoundPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            CompoundOperator::Not => {
                write!(f, "NOT ")?;
                match self.operands.as_slice() {
                    [operand] => write!(f, "{operand}"),
                    // Structurally invalid; still render something useful
                    operands => write!(f, "<{} operands>", operands.len()),
                }
            }
            operator => {
                write!(f, "(")?;
                for (i, operand) in self.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {operator} ")?;
                    }
                    write!(f, "{operand}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for OpaquePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Comparison(comparison) => write!(f, "{comparison}"),
            Self::Opaque(opaque) => write!(f, "{opaque}"),
        }
    }
}
