//! Merge two field → type mappings
//!
//! Merge rules:
//! - A key in one mapping but not the other is copied with its type intact.
//! - A key in both with equal types is kept as-is.
//! - A key in both with differing types takes the wider type; a null/absent
//!   type is narrower than any concrete type.
//! - Two differing concrete types are an error, never a silent coercion.

use super::types::{FieldType, TypeMapping};
use crate::error::{Error, Result};
use serde_json::{json, Value};

/// Merge two type mappings into a new mapping containing both key sets.
///
/// Every type value in both inputs is validated up front; an unsupported
/// type fails with `SchemaValidation` naming the offending key. Neither
/// input is mutated.
pub fn merge_schemas(schema1: &TypeMapping, schema2: &TypeMapping) -> Result<TypeMapping> {
    for (key, value) in schema1.iter().chain(schema2.iter()) {
        validate_type(key, value)?;
    }

    let mut merged = schema1.clone();
    for (key, t2) in schema2 {
        match merged.get(key) {
            None => {
                merged.insert(key.clone(), t2.clone());
            }
            Some(t1) if t1 == t2 => {}
            Some(t1) => {
                let wider = choose_wider_type(key, t1, t2)?;
                merged.insert(key.clone(), wider);
            }
        }
    }

    Ok(merged)
}

/// Transform a type mapping into JSON Schema property shape:
/// one `{"type": value}` wrapper per field.
pub fn to_json_schema_shape(type_mapping: &TypeMapping) -> TypeMapping {
    type_mapping
        .iter()
        .map(|(key, value)| (key.clone(), json!({ "type": value })))
        .collect()
}

fn validate_type(key: &str, value: &Value) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::String(name) if FieldType::parse(name).is_some() => Ok(()),
        other => Err(Error::schema_validation(key, type_display(other))),
    }
}

/// Pick the wider of two differing types. Null is narrower than anything
/// concrete; two differing concrete types have no wider type.
pub(super) fn choose_wider_type(key: &str, t1: &Value, t2: &Value) -> Result<Value> {
    match (t1, t2) {
        (Value::Null, Value::Null) => Err(Error::schema_inference(key, "null", "null")),
        (Value::Null, other) | (other, Value::Null) => Ok(other.clone()),
        (left, right) => Err(Error::schema_inference(
            key,
            type_display(left),
            type_display(right),
        )),
    }
}

fn type_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
