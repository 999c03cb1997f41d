//! Partition types

use crate::types::ValueMap;
use chrono::NaiveDate;
use serde_json::Value;

/// One step of the overall date range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day covered by this window
    pub start: NaiveDate,
    /// Last day covered by this window, never past the overall range end
    pub end: NaiveDate,
}

/// Request parameters for one field chunk within a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRequest {
    /// Parameter set handed to the fetcher collaborator
    pub params: ValueMap,
}

impl ChunkRequest {
    /// Get a parameter by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Get a string parameter by name
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

/// One partition: a date window plus the chunked requests that cover it.
///
/// Slices are independent of each other; processing order across slices is
/// the caller's choice. Within a slice, requests are issued in order.
#[derive(Debug, Clone)]
pub struct PartitionSlice {
    /// Stable identifier, used as the state-store partition key
    pub id: String,
    /// The window this slice covers
    pub window: DateWindow,
    /// One request per field chunk, in chunk iteration order
    pub requests: Vec<ChunkRequest>,
}
