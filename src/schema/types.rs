//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field → type mapping as supplied by callers.
///
/// Values are either a supported type name (see [`FieldType`]) or JSON null,
/// which stands for an absent type and is narrower than any concrete type.
pub type TypeMapping = BTreeMap<String, serde_json::Value>;

/// Supported atomic schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
}

impl FieldType {
    /// Parse a type name, returning None for unsupported types
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
        }
    }
}
