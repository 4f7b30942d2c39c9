//! Batch evaluation across a collection of targets.
//!
//! The orchestrator never fetches anything itself: callers supply an
//! already-materialized, ordered collection of candidate objects. It also
//! never filters - every target up to the fetch limit is evaluated and
//! counted, which is the point: a collection deliberately fetched without
//! its predicate can reveal items that should have matched but were
//! excluded, or vice versa.

use std::fmt::Write;

use predlens_engine::evaluate;
use predlens_foundation::{Result, Target};
use predlens_predicate::{Bindings, Predicate};

use crate::config::ExplainOptions;
use crate::format::ExplainFormatter;
use crate::summary::AggregateSummary;

/// Evaluates a predicate across a collection and renders the report.
///
/// Targets are processed in input order, up to `options.fetch_limit`. The
/// report holds one per-object section per processed target (unless
/// `aggregate_only` is set) followed by the aggregate summary. Truncation by
/// the fetch limit is stated in the summary. An empty collection yields a
/// zero-count summary, not an error.
///
/// # Errors
///
/// Returns an error only when the predicate itself is structurally invalid.
pub fn explain_collection(
    predicate: &Predicate,
    targets: &[&dyn Target],
    bindings: Option<&Bindings>,
    options: &ExplainOptions,
) -> Result<String> {
    let default_bindings = Bindings::new();
    let bindings = bindings.unwrap_or(&default_bindings);
    let formatter = ExplainFormatter::new();

    let mut summary = AggregateSummary::new();
    let mut out = String::new();

    for (index, target) in targets.iter().take(options.fetch_limit).enumerate() {
        let node = evaluate(predicate, Some(*target), bindings)?;
        if let Some(outcome) = &node.outcome {
            summary.record(outcome);
        }
        if !options.aggregate_only {
            let _ = writeln!(out, "[{}] {}", index + 1, target.describe());
            out.push_str(&formatter.render_at(&node, 1));
            out.push('\n');
        }
    }

    if targets.len() > options.fetch_limit {
        summary.truncated = Some(targets.len());
    }

    let _ = writeln!(out, "{summary}");
    if options.ignore_predicate {
        let _ = writeln!(
            out,
            "note: predicate was not used to filter this collection"
        );
    }

    Ok(out)
}
