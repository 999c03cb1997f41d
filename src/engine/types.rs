//! Engine message and statistics types

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Log level for engine messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Output message emitted during a sync
#[derive(Debug, Clone)]
pub enum Message {
    /// A batch of merged, filtered records for one partition
    Record {
        stream: String,
        records: Vec<JsonValue>,
    },
    /// A state advancement notice
    State { stream: String, state: JsonValue },
    /// A log line
    Log { level: LogLevel, message: String },
}

impl Message {
    /// Create a record batch message
    pub fn record(stream: impl Into<String>, records: Vec<JsonValue>) -> Self {
        Self::Record {
            stream: stream.into(),
            records,
        }
    }

    /// Create a state message
    pub fn state(stream: impl Into<String>, state: JsonValue) -> Self {
        Self::State {
            stream: stream.into(),
            state,
        }
    }

    /// Create an info log message
    pub fn info(message: impl Into<String>) -> Self {
        Self::Log {
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    /// Create a debug log message
    pub fn debug(message: impl Into<String>) -> Self {
        Self::Log {
            level: LogLevel::Debug,
            message: message.into(),
        }
    }

    /// Check if this is a record message
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }

    /// Check if this is a state message
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}

/// Statistics for a sync run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SyncStats {
    /// Partitions fully processed
    pub partitions_synced: usize,
    /// Partitions skipped because state marked them completed
    pub partitions_skipped: usize,
    /// Records emitted after filtering
    pub records_synced: usize,
    /// Records dropped by the cursor filter
    pub records_filtered: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Record a processed partition
    pub fn add_partition(&mut self) {
        self.partitions_synced += 1;
    }

    /// Record a skipped partition
    pub fn add_skipped(&mut self) {
        self.partitions_skipped += 1;
    }

    /// Record emitted and filtered counts for one partition
    pub fn add_records(&mut self, emitted: usize, filtered: usize) {
        self.records_synced += emitted;
        self.records_filtered += filtered;
    }
}
