//! Dotted attribute paths for reading values off targets.
//!
//! An attribute path like `"address.city"` names a chain of attribute
//! lookups. Paths are parsed once and walked segment by segment during
//! resolution, so a failure can always name the exact segment that broke.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A (possibly dotted) reference used to read a value off a target object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    /// Parses a dotted path like `"address.city"` into its segments.
    ///
    /// A path with no dots yields a single segment. Empty segments are kept
    /// as-is; they fail resolution with a message naming the empty segment
    /// rather than being silently dropped.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for AttributePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for AttributePath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}
