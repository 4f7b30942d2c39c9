//! Integration tests for predicate evaluation
//!
//! Tests evaluation semantics through the public engine API: exhaustive
//! operand evaluation, error containment, and tree isomorphism.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use predlens_engine::{describe, evaluate, Outcome};
use predlens_foundation::{Error, PlMap, Value};
use predlens_predicate::{Bindings, ComparisonOperator, Operand, Predicate};

fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (Value::from(k), v))
            .collect::<PlMap<_, _>>(),
    )
}

fn alice() -> Value {
    map(vec![
        ("name", Value::from("Alice")),
        ("age", Value::Int(20)),
    ])
}

/// An opaque predicate that counts how many times it is evaluated.
fn counting(result: bool, counter: &Arc<AtomicUsize>) -> Predicate {
    let counter = Arc::clone(counter);
    let description = format!("native({result})");
    Predicate::opaque(description, move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(result)
    })
}

// =============================================================================
// Exhaustive Evaluation
// =============================================================================

#[test]
fn and_evaluates_every_operand_exactly_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    // First operand already decides the AND; the rest must still run
    let p = Predicate::and(vec![
        counting(false, &counter),
        counting(true, &counter),
        counting(true, &counter),
    ]);
    let node = evaluate(&p, None, &Bindings::new()).unwrap();
    assert_eq!(node.matched(), Some(false));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
    assert_eq!(node.children.len(), 3);
    assert!(node.children.iter().all(|c| c.outcome.is_some()));
}

#[test]
fn or_evaluates_every_operand_exactly_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let p = Predicate::or(vec![
        counting(true, &counter),
        counting(false, &counter),
        counting(false, &counter),
    ]);
    let node = evaluate(&p, None, &Bindings::new()).unwrap();
    assert_eq!(node.matched(), Some(true));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[test]
fn nested_compounds_evaluate_all_leaves() {
    let counter = Arc::new(AtomicUsize::new(0));
    let p = Predicate::and(vec![
        Predicate::or(vec![counting(true, &counter), counting(false, &counter)]),
        Predicate::not(counting(true, &counter)),
        counting(true, &counter),
    ]);
    let node = evaluate(&p, None, &Bindings::new()).unwrap();
    assert_eq!(node.matched(), Some(false));
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

// =============================================================================
// Error Containment
// =============================================================================

#[test]
fn resolution_error_does_not_stop_siblings() {
    let counter = Arc::new(AtomicUsize::new(0));
    let p = Predicate::and(vec![
        Predicate::cmp(
            Operand::key_path("salary"),
            ComparisonOperator::Gt,
            Operand::literal(100),
        ),
        counting(true, &counter),
    ]);
    let target = alice();
    let node = evaluate(&p, Some(&target), &Bindings::new()).unwrap();

    assert!(node.is_error());
    assert!(node.children[0].is_error());
    // The sibling after the error still ran
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(node.children[1].matched(), Some(true));
}

#[test]
fn errors_propagate_through_or_and_not() {
    let failing = Predicate::cmp(
        Operand::key_path("missing"),
        ComparisonOperator::Eq,
        Operand::literal(1),
    );
    let target = alice();

    let or_node = evaluate(
        &Predicate::or(vec![failing.clone()]),
        Some(&target),
        &Bindings::new(),
    )
    .unwrap();
    assert!(or_node.is_error());

    let not_node = evaluate(&Predicate::not(failing), Some(&target), &Bindings::new()).unwrap();
    assert!(not_node.is_error());
}

#[test]
fn errors_are_never_coerced_to_false() {
    let p = Predicate::cmp(
        Operand::key_path("missing"),
        ComparisonOperator::Eq,
        Operand::literal(1),
    );
    let target = alice();
    let node = evaluate(&p, Some(&target), &Bindings::new()).unwrap();
    assert_eq!(node.matched(), None);
    assert!(matches!(node.outcome, Some(Outcome::Error(_))));
}

#[test]
fn opaque_errors_are_contained_like_resolution_errors() {
    let p = Predicate::or(vec![
        Predicate::opaque("flaky", |_, _| Err(Error::native_eval("host gone"))),
        Predicate::cmp(
            Operand::key_path("age"),
            ComparisonOperator::Gt,
            Operand::literal(18),
        ),
    ]);
    let target = alice();
    let node = evaluate(&p, Some(&target), &Bindings::new()).unwrap();
    assert!(node.is_error());
    assert!(node.children[0].is_error());
    assert_eq!(node.children[1].matched(), Some(true));
}

#[test]
fn malformed_not_aborts_the_whole_evaluation() {
    let p = Predicate::Compound(predlens_predicate::CompoundPredicate {
        operator: predlens_predicate::CompoundOperator::Not,
        operands: vec![],
    });
    let err = evaluate(&p, None, &Bindings::new()).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("got 0"));
}

// =============================================================================
// Describe-Only Mode
// =============================================================================

#[test]
fn describe_runs_no_native_code() {
    let counter = Arc::new(AtomicUsize::new(0));
    let p = Predicate::and(vec![counting(true, &counter), counting(false, &counter)]);
    let node = describe(&p);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(node.outcome.is_none());
    assert!(node.children.iter().all(|c| c.outcome.is_none()));
}

#[test]
fn describe_and_evaluate_share_descriptions() {
    let p = Predicate::and(vec![Predicate::cmp(
        Operand::key_path("age"),
        ComparisonOperator::Gt,
        Operand::literal(18),
    )]);
    let target = alice();
    let described = describe(&p);
    let evaluated = evaluate(&p, Some(&target), &Bindings::new()).unwrap();

    assert_eq!(described.description, evaluated.description);
    assert_eq!(
        described.children[0].description,
        evaluated.children[0].description
    );
}

// =============================================================================
// Undefined Semantics
// =============================================================================

#[test]
fn nil_attribute_comparisons_are_mismatches() {
    let target = map(vec![("manager", Value::Nil)]);
    let p = Predicate::cmp(
        Operand::key_path("manager.name"),
        ComparisonOperator::Eq,
        Operand::literal("Bob"),
    );
    let node = evaluate(&p, Some(&target), &Bindings::new()).unwrap();
    assert_eq!(node.matched(), Some(false));
    assert!(!node.is_error());
}

#[test]
fn nil_equals_nil() {
    let target = map(vec![("manager", Value::Nil)]);
    let p = Predicate::cmp(
        Operand::key_path("manager"),
        ComparisonOperator::Eq,
        Operand::literal(Value::Nil),
    );
    let node = evaluate(&p, Some(&target), &Bindings::new()).unwrap();
    assert_eq!(node.matched(), Some(true));
}
