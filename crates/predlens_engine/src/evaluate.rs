//! Recursive predicate evaluation.
//!
//! Evaluation is depth-first: descriptions are fixed before recursion,
//! results are combined after it. Every operand of AND/OR is always
//! evaluated and recorded, even when the parent's result is already
//! determined - the goal is diagnosis, not performance, so short-circuiting
//! would hide exactly the sub-results a reader came for.
//!
//! Per-node failures (unresolvable attributes, missing bindings, native
//! evaluation errors) are embedded in the tree as error outcomes and never
//! abort sibling branches. The single hard failure is a structurally invalid
//! predicate, which says the predicate itself is broken rather than the data.

use predlens_foundation::{Error, Result, Target, Value};
use predlens_predicate::{
    Bindings, ComparisonOperator, CompoundOperator, Operand, Predicate, PredicateShape,
};

use crate::node::{ExplanationNode, Outcome};
use crate::resolve::resolve_path;

/// Builds the description-only explanation tree for a predicate.
///
/// Nothing is evaluated: no attribute resolution, no binding lookup, no
/// native callbacks. Every node's outcome is `None`.
#[must_use]
pub fn describe(predicate: &Predicate) -> ExplanationNode {
    match predicate.shape() {
        PredicateShape::Compound { operator, operands } => ExplanationNode::new(
            operator.to_string(),
            None,
            operands.iter().map(describe).collect(),
        ),
        PredicateShape::Comparison { .. } | PredicateShape::Opaque { .. } => {
            ExplanationNode::leaf(predicate.to_string(), None)
        }
    }
}

/// Evaluates a predicate against a target, producing an explanation tree.
///
/// The returned tree is structurally isomorphic to the predicate: one node
/// per predicate node, children in operand order. An empty AND is vacuously
/// true; an empty OR is false.
///
/// # Errors
///
/// Returns [`Error::malformed_predicate`] when a NOT compound has an operand
/// count other than one. All other failures are embedded in the tree as
/// error outcomes.
pub fn evaluate(
    predicate: &Predicate,
    target: Option<&dyn Target>,
    bindings: &Bindings,
) -> Result<ExplanationNode> {
    Ok(evaluate_node(predicate, target, bindings)?.1)
}

/// Recursive worker returning the outcome alongside the node.
fn evaluate_node(
    predicate: &Predicate,
    target: Option<&dyn Target>,
    bindings: &Bindings,
) -> Result<(Outcome, ExplanationNode)> {
    match predicate.shape() {
        PredicateShape::Compound { operator, operands } => match operator {
            CompoundOperator::Not => {
                if operands.len() != 1 {
                    return Err(Error::malformed_predicate(format!(
                        "NOT takes exactly one operand, got {}",
                        operands.len()
                    )));
                }
                let (child_outcome, child) = evaluate_node(&operands[0], target, bindings)?;
                let outcome = child_outcome.negate();
                let node =
                    ExplanationNode::new("NOT", Some(outcome.clone()), vec![child]);
                Ok((outcome, node))
            }
            CompoundOperator::And | CompoundOperator::Or => {
                let mut children = Vec::with_capacity(operands.len());
                let mut outcomes = Vec::with_capacity(operands.len());
                // Deliberately no short-circuit: every operand is evaluated
                // and shown even when the result is already determined.
                for operand in operands {
                    let (outcome, child) = evaluate_node(operand, target, bindings)?;
                    outcomes.push(outcome);
                    children.push(child);
                }
                let outcome = match operator {
                    CompoundOperator::And => {
                        outcomes.into_iter().fold(Outcome::Matched, Outcome::and)
                    }
                    _ => outcomes.into_iter().fold(Outcome::Unmatched, Outcome::or),
                };
                let node = ExplanationNode::new(
                    operator.to_string(),
                    Some(outcome.clone()),
                    children,
                );
                Ok((outcome, node))
            }
        },
        PredicateShape::Comparison {
            left,
            operator,
            right,
        } => {
            // Both sides resolve regardless of the other's failure
            let left_value = resolve_operand(left, target, bindings);
            let right_value = resolve_operand(right, target, bindings);
            let outcome = match (left_value, right_value) {
                (Ok(l), Ok(r)) => Outcome::from_bool(compare(&l, operator, &r)),
                (Err(e), _) | (_, Err(e)) => Outcome::Error(e),
            };
            let node = ExplanationNode::leaf(predicate.to_string(), Some(outcome.clone()));
            Ok((outcome, node))
        }
        PredicateShape::Opaque { description, eval } => {
            let outcome = match eval.eval(target, bindings) {
                Ok(matched) => Outcome::from_bool(matched),
                Err(e) => Outcome::Error(e),
            };
            let node = ExplanationNode::leaf(description, Some(outcome.clone()));
            Ok((outcome, node))
        }
    }
}

/// Resolves one comparison operand to a value.
///
/// Literals resolve to themselves, key paths go through the value resolver,
/// and placeholders are looked up in the bindings.
fn resolve_operand(
    operand: &Operand,
    target: Option<&dyn Target>,
    bindings: &Bindings,
) -> Result<Value> {
    match operand {
        Operand::Literal(value) => Ok(value.clone()),
        Operand::KeyPath(path) => resolve_path(target, path),
        Operand::Placeholder(name) => bindings
            .get(name)
            .cloned()
            .ok_or_else(|| Error::missing_binding(name.as_str())),
    }
}

/// Applies a comparison operator to two resolved values.
///
/// Incomparable type pairings (e.g. ordering an int against a string) are
/// mismatches, not errors: the predicate evaluated fine, it just didn't hold.
fn compare(left: &Value, operator: ComparisonOperator, right: &Value) -> bool {
    use std::cmp::Ordering;

    match operator {
        ComparisonOperator::Eq => left == right,
        ComparisonOperator::Ne => left != right,
        ComparisonOperator::Lt => {
            matches!(left.partial_cmp(right), Some(Ordering::Less))
        }
        ComparisonOperator::Le => {
            matches!(
                left.partial_cmp(right),
                Some(Ordering::Less | Ordering::Equal)
            )
        }
        ComparisonOperator::Gt => {
            matches!(left.partial_cmp(right), Some(Ordering::Greater))
        }
        ComparisonOperator::Ge => {
            matches!(
                left.partial_cmp(right),
                Some(Ordering::Greater | Ordering::Equal)
            )
        }
        ComparisonOperator::In => contains(right, left),
        ComparisonOperator::Contains => contains(left, right),
        ComparisonOperator::BeginsWith => match (left.as_str(), right.as_str()) {
            (Some(l), Some(r)) => l.starts_with(r),
            _ => false,
        },
        ComparisonOperator::EndsWith => match (left.as_str(), right.as_str()) {
            (Some(l), Some(r)) => l.ends_with(r),
            _ => false,
        },
    }
}

/// Containment over strings, vectors, and map keys.
fn contains(haystack: &Value, needle: &Value) -> bool {
    match haystack {
        Value::String(s) => needle.as_str().is_some_and(|n| s.contains(n)),
        Value::Vec(v) => v.iter().any(|item| item == needle),
        Value::Map(m) => m.contains_key(needle),
        _ => false,
    }
}
