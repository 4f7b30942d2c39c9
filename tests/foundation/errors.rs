//! Integration tests for error types
//!
//! Tests error construction, messages, and the hard-failure distinction.

use predlens_foundation::{AttributePath, Error, ErrorKind};

#[test]
fn unknown_attribute_message_names_segment_and_path() {
    let path = AttributePath::parse("address.city");
    let err = Error::unknown_attribute("city", &path);
    assert_eq!(
        err.to_string(),
        "unknown attribute \"city\" in path \"address.city\""
    );
}

#[test]
fn missing_binding_message() {
    let err = Error::missing_binding("MIN_AGE");
    assert_eq!(err.to_string(), "missing binding for $MIN_AGE");
}

#[test]
fn malformed_predicate_message() {
    let err = Error::malformed_predicate("NOT takes exactly one operand, got 0");
    assert_eq!(
        err.to_string(),
        "malformed predicate: NOT takes exactly one operand, got 0"
    );
}

#[test]
fn native_eval_message() {
    let err = Error::native_eval("callback unavailable");
    assert_eq!(err.to_string(), "native evaluation failed: callback unavailable");
}

#[test]
fn only_malformed_predicates_are_hard_failures() {
    let path = AttributePath::parse("x");
    assert!(Error::malformed_predicate("bad shape").is_malformed());
    assert!(!Error::unknown_attribute("x", &path).is_malformed());
    assert!(!Error::missing_binding("X").is_malformed());
    assert!(!Error::native_eval("boom").is_malformed());
}

#[test]
fn error_kinds_are_matchable() {
    let err = Error::missing_binding("LIMIT");
    match err.kind {
        ErrorKind::MissingBinding { name } => assert_eq!(name, "LIMIT"),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn errors_are_cloneable_and_comparable() {
    let err = Error::missing_binding("X");
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::missing_binding("Y"));
}
