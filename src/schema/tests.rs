//! Tests for schema module

use super::merge::choose_wider_type;
use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn mapping(entries: &[(&str, Value)]) -> TypeMapping {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn test_merge_disjoint_keys_is_union() {
    let a = mapping(&[("id", json!("string"))]);
    let b = mapping(&[("name", json!("string"))]);

    let merged = merge_schemas(&a, &b).unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["id"], json!("string"));
    assert_eq!(merged["name"], json!("string"));

    // Commutative on disjoint keys
    assert_eq!(merged, merge_schemas(&b, &a).unwrap());
}

#[test]
fn test_merge_agreeing_keys_kept_as_is() {
    let a = mapping(&[("id", json!("string")), ("name", json!("string"))]);
    let b = mapping(&[("id", json!("string"))]);

    let merged = merge_schemas(&a, &b).unwrap();
    assert_eq!(merged, a);
    assert_eq!(merge_schemas(&a, &b).unwrap(), merge_schemas(&b, &a).unwrap());
}

#[test]
fn test_merge_widens_null_to_concrete() {
    let a = mapping(&[("id", Value::Null)]);
    let b = mapping(&[("id", json!("string"))]);

    let merged = merge_schemas(&a, &b).unwrap();
    assert_eq!(merged["id"], json!("string"));

    // Widening is symmetric for the one-sided-null case
    let merged = merge_schemas(&b, &a).unwrap();
    assert_eq!(merged["id"], json!("string"));
}

#[test]
fn test_merge_does_not_mutate_inputs() {
    let a = mapping(&[("id", Value::Null)]);
    let b = mapping(&[("id", json!("string")), ("name", json!("string"))]);
    let (a_before, b_before) = (a.clone(), b.clone());

    merge_schemas(&a, &b).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_merge_rejects_unsupported_type() {
    let a = mapping(&[("id", json!("string"))]);
    let b = mapping(&[("age", json!("integer"))]);

    let err = merge_schemas(&a, &b).unwrap_err();
    match err {
        Error::SchemaValidation { field, type_name } => {
            assert_eq!(field, "age");
            assert_eq!(type_name, "integer");
        }
        other => panic!("expected SchemaValidation, got {other}"),
    }
}

#[test]
fn test_merge_rejects_non_string_type_value() {
    let a = mapping(&[("id", json!("string"))]);
    let b = mapping(&[("id", json!(42))]);

    assert!(matches!(
        merge_schemas(&a, &b),
        Err(Error::SchemaValidation { .. })
    ));
}

#[test]
fn test_conflicting_concrete_types_name_both() {
    // Exercised directly: the supported-type set currently admits a single
    // concrete type, so merge_schemas cannot reach this arm with valid input.
    let err = choose_wider_type("age", &json!("string"), &json!("integer")).unwrap_err();
    match err {
        Error::SchemaInference { field, left, right } => {
            assert_eq!(field, "age");
            assert_eq!(left, "string");
            assert_eq!(right, "integer");
        }
        other => panic!("expected SchemaInference, got {other}"),
    }
}

#[test]
fn test_to_json_schema_shape() {
    let mapping = mapping(&[("id", json!("string")), ("name", json!("string"))]);
    let shaped = to_json_schema_shape(&mapping);

    assert_eq!(shaped["id"], json!({ "type": "string" }));
    assert_eq!(shaped["name"], json!({ "type": "string" }));
    assert_eq!(shaped.len(), 2);
}

#[test]
fn test_to_json_schema_shape_empty() {
    let shaped = to_json_schema_shape(&BTreeMap::new());
    assert!(shaped.is_empty());
}

#[test]
fn test_field_type_parse() {
    assert_eq!(FieldType::parse("string"), Some(FieldType::String));
    assert_eq!(FieldType::parse("integer"), None);
    assert_eq!(FieldType::String.to_string(), "string");
}
