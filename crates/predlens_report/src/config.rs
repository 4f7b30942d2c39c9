//! Configuration for batch explain runs.
//!
//! All knobs are explicit parameters with stated defaults; there are no
//! hidden module-level constants.

/// Configuration for [`explain_collection`](crate::explain_collection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainOptions {
    /// Maximum number of targets to process (default 100).
    pub fetch_limit: usize,

    /// Suppress per-object sections and report only the aggregate summary.
    pub aggregate_only: bool,

    /// The supplied collection was fetched without applying the predicate.
    ///
    /// Evaluation still runs and reports per-object results; the summary
    /// notes that the predicate did not filter the collection, so mismatches
    /// surface items a filtered fetch would have excluded (false
    /// positive/negative hunting).
    pub ignore_predicate: bool,
}

impl Default for ExplainOptions {
    fn default() -> Self {
        Self {
            fetch_limit: 100,
            aggregate_only: false,
            ignore_predicate: false,
        }
    }
}

impl ExplainOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the fetch limit.
    #[must_use]
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    /// Builder method to suppress per-object sections.
    #[must_use]
    pub fn with_aggregate_only(mut self, aggregate_only: bool) -> Self {
        self.aggregate_only = aggregate_only;
        self
    }

    /// Builder method to mark the collection as fetched without the predicate.
    #[must_use]
    pub fn with_ignore_predicate(mut self, ignore_predicate: bool) -> Self {
        self.ignore_predicate = ignore_predicate;
        self
    }
}
