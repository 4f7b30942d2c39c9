//! Integration tests for persistent collections
//!
//! Tests PlVec and PlMap persistence semantics through the public API.

use predlens_foundation::collections::{PlMap, PlVec};
use predlens_foundation::Value;

// =============================================================================
// PlVec
// =============================================================================

#[test]
fn vec_push_back_returns_new_vector() {
    let a: PlVec<i32> = PlVec::new();
    let b = a.push_back(1);
    let c = b.push_back(2);

    assert!(a.is_empty());
    assert_eq!(b.len(), 1);
    assert_eq!(c.len(), 2);
    assert_eq!(c.get(1), Some(&2));
}

#[test]
fn vec_iteration_preserves_order() {
    let v: PlVec<i32> = (0..10).collect();
    let collected: Vec<i32> = v.iter().copied().collect();
    assert_eq!(collected, (0..10).collect::<Vec<_>>());
}

#[test]
fn vec_equality_is_structural() {
    let a: PlVec<i32> = vec![1, 2, 3].into();
    let b: PlVec<i32> = (1..=3).collect();
    assert_eq!(a, b);
}

#[test]
fn vec_of_values() {
    let v: PlVec<Value> = vec![Value::Int(1), Value::from("two")].into();
    assert_eq!(v.first(), Some(&Value::Int(1)));
    assert_eq!(v.last(), Some(&Value::from("two")));
}

// =============================================================================
// PlMap
// =============================================================================

#[test]
fn map_insert_returns_new_map() {
    let a: PlMap<Value, Value> = PlMap::new();
    let b = a.insert(Value::from("k"), Value::Int(1));

    assert!(a.is_empty());
    assert_eq!(b.len(), 1);
    assert_eq!(b.get(&Value::from("k")), Some(&Value::Int(1)));
}

#[test]
fn map_insert_replaces_existing_key() {
    let m = PlMap::new()
        .insert(Value::from("k"), Value::Int(1))
        .insert(Value::from("k"), Value::Int(2));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get(&Value::from("k")), Some(&Value::Int(2)));
}

#[test]
fn map_keys_are_enumerable() {
    let m = PlMap::new()
        .insert(Value::from("a"), Value::Int(1))
        .insert(Value::from("b"), Value::Int(2));
    let keys: Vec<&Value> = m.keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&&Value::from("a")));
    assert!(keys.contains(&&Value::from("b")));
}

#[test]
fn map_equality_ignores_insertion_order() {
    let a = PlMap::new()
        .insert(Value::from("x"), Value::Int(1))
        .insert(Value::from("y"), Value::Int(2));
    let b = PlMap::new()
        .insert(Value::from("y"), Value::Int(2))
        .insert(Value::from("x"), Value::Int(1));
    assert_eq!(a, b);
}
