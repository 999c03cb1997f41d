//! Common types used throughout pivotstream
//!
//! Shared type definitions and aliases used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type; the in-memory record representation
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and JSON values
pub type ValueMap = HashMap<String, JsonValue>;

// ============================================================================
// Cursor Format
// ============================================================================

/// How cursor field values are compared during filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorFormat {
    /// Cursor values are date/date-time strings, compared lexicographically
    #[default]
    DateString,
    /// Cursor values are epoch-millisecond timestamps, compared numerically
    Timestamp,
}
