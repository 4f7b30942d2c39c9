//! Integration tests for predicate descriptions
//!
//! Tests the one-line rendered forms used as explanation node descriptions.

use predlens_predicate::{ComparisonOperator, Operand, Predicate};

fn cmp(left: Operand, op: ComparisonOperator, right: Operand) -> Predicate {
    Predicate::cmp(left, op, right)
}

#[test]
fn every_comparison_operator_has_a_spelling() {
    use ComparisonOperator as Op;
    let cases = [
        (Op::Eq, "score == 10"),
        (Op::Ne, "score != 10"),
        (Op::Lt, "score < 10"),
        (Op::Le, "score <= 10"),
        (Op::Gt, "score > 10"),
        (Op::Ge, "score >= 10"),
        (Op::In, "score IN 10"),
        (Op::Contains, "score CONTAINS 10"),
        (Op::BeginsWith, "score BEGINSWITH 10"),
        (Op::EndsWith, "score ENDSWITH 10"),
    ];
    for (op, expected) in cases {
        let p = cmp(Operand::key_path("score"), op, Operand::literal(10));
        assert_eq!(p.to_string(), expected);
    }
}

#[test]
fn literal_operands_render_as_written() {
    let p = cmp(
        Operand::literal("needle"),
        ComparisonOperator::In,
        Operand::key_path("tags"),
    );
    assert_eq!(p.to_string(), "\"needle\" IN tags");
}

#[test]
fn vector_literals_render_elementwise() {
    let p = cmp(
        Operand::key_path("status"),
        ComparisonOperator::In,
        Operand::literal(vec!["open", "pending"]),
    );
    assert_eq!(p.to_string(), "status IN [\"open\", \"pending\"]");
}

#[test]
fn compound_descriptions_nest_with_parentheses() {
    let adult = cmp(
        Operand::key_path("age"),
        ComparisonOperator::Ge,
        Operand::literal(18),
    );
    let named = cmp(
        Operand::key_path("name"),
        ComparisonOperator::Eq,
        Operand::literal("Alice"),
    );
    let p = Predicate::or(vec![
        Predicate::and(vec![adult.clone(), named]),
        Predicate::not(adult),
    ]);
    assert_eq!(
        p.to_string(),
        "((age >= 18 AND name == \"Alice\") OR NOT age >= 18)"
    );
}

#[test]
fn placeholder_spelling_matches_binding_name() {
    let p = cmp(
        Operand::key_path("age"),
        ComparisonOperator::Ge,
        Operand::placeholder("MIN_AGE"),
    );
    assert_eq!(p.to_string(), "age >= $MIN_AGE");
}

#[test]
fn opaque_description_is_verbatim() {
    let p = Predicate::opaque("SUBQUERY(items, $x, $x.done == false)", |_, _| Ok(true));
    assert_eq!(p.to_string(), "SUBQUERY(items, $x, $x.done == false)");
}

#[test]
fn description_is_stable_across_calls() {
    let p = Predicate::and(vec![cmp(
        Operand::key_path("a"),
        ComparisonOperator::Eq,
        Operand::literal(1),
    )]);
    assert_eq!(p.to_string(), p.to_string());
}
