//! Collection-level aggregation of evaluation outcomes.

use std::fmt;

use predlens_engine::Outcome;

/// Counts of matched/mismatched/errored evaluations across a collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    /// Number of targets evaluated.
    pub evaluated: usize,
    /// Number of targets that matched the predicate.
    pub matched: usize,
    /// Number of targets that did not match.
    pub mismatched: usize,
    /// Number of targets whose evaluation hit an error.
    pub errored: usize,
    /// Total targets supplied, when the fetch limit cut processing short.
    pub truncated: Option<usize>,
}

impl AggregateSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluation outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        self.evaluated += 1;
        match outcome {
            Outcome::Matched => self.matched += 1,
            Outcome::Unmatched => self.mismatched += 1,
            Outcome::Error(_) => self.errored += 1,
        }
    }

    /// Returns true if no targets were evaluated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.evaluated == 0
    }
}

impl fmt::Display for AggregateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "evaluated: {}, matched: {}, mismatched: {}, errored: {}",
            self.evaluated, self.matched, self.mismatched, self.errored
        )?;
        if let Some(total) = self.truncated {
            write!(
                f,
                "\ntruncated: stopped after {} of {} objects (fetch limit)",
                self.evaluated, total
            )?;
        }
        Ok(())
    }
}
