//! Schema merging for heterogeneous record sets
//!
//! Analytics chunks and user-declared schemas arrive as flat field → type
//! mappings. This module merges them, widening types where one side is
//! absent and rejecting concrete conflicts instead of silently coercing.

mod merge;
mod types;

pub use merge::{merge_schemas, to_json_schema_shape};
pub use types::{FieldType, TypeMapping};

#[cfg(test)]
mod tests;
