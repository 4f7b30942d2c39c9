//! Single-predicate explain entry points.
//!
//! These are two of the three public call shapes; the batch form lives in
//! [`crate::batch`].

use predlens_engine::{describe, evaluate};
use predlens_foundation::{Result, Target};
use predlens_predicate::{Bindings, Predicate};

use crate::format::ExplainFormatter;

/// Renders the structural description of a predicate.
///
/// No target, no evaluation: only the predicate's decomposition is shown, so
/// no resolution or binding error is possible here.
#[must_use]
pub fn explain(predicate: &Predicate) -> String {
    ExplainFormatter::new().render(&describe(predicate))
}

/// Evaluates a predicate against a single target and renders the trace.
///
/// The trace shows how the predicate was decomposed, what each
/// sub-expression evaluated to, and where a match or mismatch first
/// occurred. Resolution and binding failures render inline as error nodes.
///
/// # Errors
///
/// Returns an error only when the predicate itself is structurally invalid
/// (e.g. a NOT with more than one operand).
pub fn explain_object(
    predicate: &Predicate,
    target: &dyn Target,
    bindings: Option<&Bindings>,
) -> Result<String> {
    let default_bindings = Bindings::new();
    let node = evaluate(
        predicate,
        Some(target),
        bindings.unwrap_or(&default_bindings),
    )?;
    Ok(ExplainFormatter::new().render(&node))
}
