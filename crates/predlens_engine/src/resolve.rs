//! Attribute path resolution against arbitrary targets.
//!
//! Resolution walks a dotted path segment by segment. Missing objects and
//! unset attributes resolve to the undefined sentinel ([`Value::Nil`]) so
//! downstream comparisons render as explainable mismatches; only an
//! attribute the target does not support at all is an error, and that error
//! names the failing segment.

use predlens_foundation::{AttributePath, Error, Result, Target, Value};

/// Resolves an attribute path against an optional target.
///
/// - A `None` target resolves to `Value::Nil` rather than failing.
/// - An intermediate segment resolving to nil short-circuits to `Value::Nil`
///   (optional-chaining semantics).
/// - A segment the current object does not support fails with
///   [`Error::unknown_attribute`] carrying the segment name.
///
/// # Errors
///
/// Returns an error when a path segment names an attribute the target (or an
/// intermediate value) does not support.
pub fn resolve_path(target: Option<&dyn Target>, path: &AttributePath) -> Result<Value> {
    let Some(target) = target else {
        return Ok(Value::Nil);
    };

    let mut current: Option<Value> = None;
    for segment in path.segments() {
        let next = match &current {
            None => target.resolve_attribute(segment),
            Some(value) => {
                if value.is_nil() {
                    return Ok(Value::Nil);
                }
                value.resolve_attribute(segment)
            }
        };
        match next {
            Some(value) => current = Some(value),
            None => return Err(Error::unknown_attribute(segment.as_str(), path)),
        }
    }

    Ok(current.unwrap_or(Value::Nil))
}
