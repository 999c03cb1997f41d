//! Date range partitioning
//!
//! Walks a date interval in calendar steps, producing one independently-
//! fetchable [`PartitionSlice`] per window. Each slice carries one request
//! parameter set per field chunk, so the fetch loop can issue every chunked
//! request for a window and merge the responses.

mod types;
mod windows;

pub use types::{ChunkRequest, DateWindow, PartitionSlice};
pub use windows::{DateRangePartitioner, WindowIter};

#[cfg(test)]
mod tests;
