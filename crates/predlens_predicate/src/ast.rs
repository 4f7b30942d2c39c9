//! Predicate tree nodes.
//!
//! A [`Predicate`] is an immutable boolean expression over a target's
//! attributes. The tree is built from three node kinds: compound logical
//! operators (AND/OR/NOT), binary comparisons, and opaque predicates that
//! the decomposer does not recognize and evaluates monolithically through an
//! injected native capability.

use std::fmt;
use std::sync::Arc;

use predlens_foundation::{AttributePath, Error, Result, Target, Value};

use crate::bindings::Bindings;

/// An immutable boolean expression evaluated against a target.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// Logical combination of sub-predicates.
    Compound(CompoundPredicate),
    /// Binary comparison of two operands.
    Comparison(ComparisonPredicate),
    /// Unrecognized predicate kind, evaluated monolithically.
    Opaque(OpaquePredicate),
}

impl Predicate {
    /// Builds an AND over the given operands.
    #[must_use]
    pub fn and(operands: Vec<Predicate>) -> Self {
        Self::Compound(CompoundPredicate {
            operator: CompoundOperator::And,
            operands,
        })
    }

    /// Builds an OR over the given operands.
    #[must_use]
    pub fn or(operands: Vec<Predicate>) -> Self {
        Self::Compound(CompoundPredicate {
            operator: CompoundOperator::Or,
            operands,
        })
    }

    /// Builds a NOT around a single operand.
    #[must_use]
    pub fn not(operand: Predicate) -> Self {
        Self::Compound(CompoundPredicate {
            operator: CompoundOperator::Not,
            operands: vec![operand],
        })
    }

    /// Builds a binary comparison.
    #[must_use]
    pub fn cmp(left: Operand, operator: ComparisonOperator, right: Operand) -> Self {
        Self::Comparison(ComparisonPredicate {
            left,
            operator,
            right,
        })
    }

    /// Builds an opaque predicate around a native evaluation capability.
    ///
    /// The description is the node's entire rendered form; no children are
    /// ever synthesized for opaque predicates.
    pub fn opaque<F>(description: impl Into<Arc<str>>, eval: F) -> Self
    where
        F: Fn(Option<&dyn Target>, &Bindings) -> Result<bool> + Send + Sync + 'static,
    {
        Self::Opaque(OpaquePredicate {
            description: description.into(),
            eval: NativeEval::new(eval),
        })
    }
}

/// Logical operator for compound predicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompoundOperator {
    /// All operands must match.
    And,
    /// At least one operand must match.
    Or,
    /// Negates its single operand.
    Not,
}

/// A predicate built from logical AND/OR/NOT over sub-predicates.
///
/// Operand order is preserved; it affects display order only, since every
/// operand is always evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundPredicate {
    /// The logical operator.
    pub operator: CompoundOperator,
    /// The sub-predicates, in display order.
    pub operands: Vec<Predicate>,
}

/// Relational operator for comparison predicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equality.
    Eq,
    /// Inequality.
    Ne,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Left value is an element (or substring) of the right collection.
    In,
    /// Left collection (or string) contains the right value.
    Contains,
    /// Left string begins with the right string.
    BeginsWith,
    /// Left string ends with the right string.
    EndsWith,
}

/// A predicate comparing two operands with a relational operator.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonPredicate {
    /// Left-hand operand.
    pub left: Operand,
    /// The relational operator.
    pub operator: ComparisonOperator,
    /// Right-hand operand.
    pub right: Operand,
}

/// One side of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A literal value; resolves to itself.
    Literal(Value),
    /// An attribute path; resolved against the target.
    KeyPath(AttributePath),
    /// A `$NAME` substitution placeholder; resolved through the bindings.
    Placeholder(String),
}

impl Operand {
    /// Builds a literal operand.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Builds a key path operand.
    #[must_use]
    pub fn key_path(path: impl Into<AttributePath>) -> Self {
        Self::KeyPath(path.into())
    }

    /// Builds a placeholder operand.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(name.into())
    }
}

/// An unrecognized predicate kind.
///
/// Carries its rendered description and the native capability used to
/// evaluate it. Always treated as a leaf.
#[derive(Clone)]
pub struct OpaquePredicate {
    /// The node's rendered form.
    pub description: Arc<str>,
    /// The injected native evaluation capability.
    pub eval: NativeEval,
}

impl fmt::Debug for OpaquePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaquePredicate({:?})", self.description)
    }
}

// Opaque predicates compare by description and capability identity; two
// opaque nodes built from distinct closures are never equal.
impl PartialEq for OpaquePredicate {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.eval == other.eval
    }
}

/// The injected "evaluate this predicate against this object" capability.
///
/// Used for opaque predicate kinds the decomposer cannot take apart.
#[derive(Clone)]
pub struct NativeEval {
    func: Arc<dyn Fn(Option<&dyn Target>, &Bindings) -> Result<bool> + Send + Sync>,
}

impl NativeEval {
    /// Wraps a native evaluation function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Option<&dyn Target>, &Bindings) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Evaluates against the target with the given bindings.
    ///
    /// # Errors
    ///
    /// Returns whatever [`Error`] the underlying capability reports; the
    /// evaluator embeds it as an error node rather than propagating it.
    pub fn eval(&self, target: Option<&dyn Target>, bindings: &Bindings) -> Result<bool> {
        (self.func)(target, bindings)
    }

    /// Wraps a capability that always fails with the given message.
    ///
    /// Useful for representing predicate kinds the host cannot evaluate
    /// while still letting them render in describe-only mode.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |_, _| Err(Error::native_eval(message.clone())))
    }
}

impl fmt::Debug for NativeEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native eval>")
    }
}

impl PartialEq for NativeEval {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}
