//! State types for tracking sync progress

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete persisted state for a connector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    /// Per-stream state
    #[serde(default)]
    pub streams: HashMap<String, StreamState>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get state for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamState> {
        self.streams.get(stream)
    }

    /// Get mutable state for a stream, creating if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamState {
        self.streams.entry(stream.to_string()).or_default()
    }
}

/// State for a single stream: one entry per partition identity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamState {
    /// Per-partition state, keyed by partition id
    #[serde(default)]
    pub partitions: HashMap<String, PartitionState>,
}

impl StreamState {
    /// Get partition state
    pub fn get_partition(&self, partition_id: &str) -> Option<&PartitionState> {
        self.partitions.get(partition_id)
    }

    /// Get mutable partition state, creating if needed
    pub fn get_partition_mut(&mut self, partition_id: &str) -> &mut PartitionState {
        self.partitions.entry(partition_id.to_string()).or_default()
    }

    /// Check if a partition is completed
    pub fn is_partition_completed(&self, partition_id: &str) -> bool {
        self.partitions
            .get(partition_id)
            .is_some_and(|p| p.completed)
    }
}

/// State for a single partition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionState {
    /// Last-synced cursor value within this partition
    #[serde(default)]
    pub cursor: Option<String>,

    /// Whether this partition has been fully synced
    #[serde(default)]
    pub completed: bool,
}
