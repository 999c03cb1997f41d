//! Reportable-field catalog and chunking
//!
//! Reporting APIs cap the number of metric fields per request. The chunker
//! splits an ordered catalog into bounded groups, forcing the two grouping
//! fields every response row needs (`dateRange`, `pivotValues`) into each
//! group so merge-by-key always has its composite key material.

mod catalog;
mod chunker;

pub use catalog::{ANALYTICS_FIELDS, DATE_RANGE_FIELD, DEFAULT_CHUNK_SIZE, PIVOT_VALUES_FIELD};
pub use chunker::{FieldChunk, FieldChunker};

#[cfg(test)]
mod tests;
