//! The attribute-resolution capability implemented by explain targets.
//!
//! Targets may be arbitrarily shaped; the engine never assumes a schema.
//! Anything that can answer "what is the value of attribute `name`?" can be
//! explained against. Plain [`Value`] maps implement the trait out of the
//! box, so simple data needs no wrapper type.

use crate::value::Value;

/// Generic attribute-resolution capability for explain targets.
///
/// Implementations distinguish two kinds of absence:
/// - `Some(Value::Nil)` - the attribute is supported but currently unset;
///   resolution continues with the undefined sentinel.
/// - `None` - the target does not support the attribute at all; resolution
///   fails with an error naming the segment.
pub trait Target {
    /// Resolves a single attribute by name.
    fn resolve_attribute(&self, name: &str) -> Option<Value>;

    /// One-line description of the target, used in report headers.
    fn describe(&self) -> String;
}

impl Target for Value {
    fn resolve_attribute(&self, name: &str) -> Option<Value> {
        match self {
            Self::Map(m) => m.get(&Value::from(name)).cloned(),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
