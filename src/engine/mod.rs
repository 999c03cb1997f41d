//! Execution engine
//!
//! Orchestrates one sync: partition the date range, run the paginated fetch
//! loop per slice, filter against the persisted cursor, emit records and
//! advance state. Slices are processed sequentially here; they share no
//! state, so callers needing parallelism can drive
//! [`crate::fetch::SliceReader`] across slices themselves.

mod types;

pub use types::{LogLevel, Message, SyncStats};

use crate::config::SyncConfig;
use crate::cursor::CursorFilter;
use crate::error::Result;
use crate::fetch::{Fetcher, NormalizePolicy, SliceReader};
use crate::fields::FieldChunker;
use crate::normalize::RecordNormalizer;
use crate::partition::DateRangePartitioner;
use crate::state::StateManager;
use crate::types::{CursorFormat, JsonValue};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

/// Sync engine for one analytics stream
pub struct SyncEngine<F: Fetcher> {
    fetcher: F,
    state: StateManager,
    config: SyncConfig,
    chunker: FieldChunker,
    policy: NormalizePolicy,
    stats: SyncStats,
}

impl<F: Fetcher> SyncEngine<F> {
    /// Create a new engine with the default field catalog
    pub fn new(fetcher: F, state: StateManager, config: SyncConfig) -> Self {
        let chunker = FieldChunker::new(
            crate::fields::ANALYTICS_FIELDS.iter().map(ToString::to_string),
            config.chunk_size,
        );
        Self {
            fetcher,
            state,
            config,
            chunker,
            policy: NormalizePolicy::default(),
            stats: SyncStats::default(),
        }
    }

    /// Override the field catalog
    #[must_use]
    pub fn with_chunker(mut self, chunker: FieldChunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Set the normalization failure policy
    #[must_use]
    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get statistics for the last sync
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Get the state manager
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Sync one stream across every partition slice of the configured range
    pub async fn sync_stream(&mut self, stream_name: &str) -> Result<Vec<Message>> {
        let start = Instant::now();
        self.config.validate()?;
        self.stats = SyncStats::default();

        let partitioner = DateRangePartitioner::from_config(&self.config, self.chunker.clone())?;
        let filter = CursorFilter::from_config(&self.config);
        let normalizer = RecordNormalizer::from_config(&self.config);
        let reader = SliceReader::new(&self.fetcher, normalizer).with_policy(self.policy);

        let mut messages = Vec::new();
        messages.push(Message::info(format!(
            "Starting sync for stream: {stream_name}"
        )));
        info!(stream = stream_name, "starting sync");

        for slice in partitioner.slices() {
            if self
                .state
                .is_partition_completed(stream_name, &slice.id)
                .await
            {
                debug!(slice = slice.id.as_str(), "skipping completed partition");
                messages.push(Message::debug(format!(
                    "Skipping completed partition: {}",
                    slice.id
                )));
                self.stats.add_skipped();
                continue;
            }

            let fetched = reader.read_slice(&slice).await?;
            let fetched_count = fetched.len();

            let persisted = self
                .state
                .get_partition_cursor(stream_name, &slice.id)
                .await;
            let records = filter.filter_records(fetched, persisted.as_deref(), &slice.id);
            let emitted = records.len();
            self.stats.add_records(emitted, fetched_count - emitted);

            debug!(
                slice = slice.id.as_str(),
                fetched = fetched_count,
                emitted,
                "partition read complete"
            );

            let max_cursor = extract_max_cursor(
                &records,
                filter.cursor_field(),
                self.config.cursor_format,
            );
            messages.push(Message::record(stream_name, records));

            // Cursor advances only after the partition's records are emitted
            if let Some(cursor) = max_cursor {
                self.state
                    .set_partition_cursor(stream_name, &slice.id, cursor.clone())
                    .await?;
                messages.push(Message::state(
                    stream_name,
                    json!({ "partition": slice.id, "cursor": cursor }),
                ));
            }
            self.state
                .mark_partition_completed(stream_name, &slice.id)
                .await?;
            self.stats.add_partition();
        }

        self.stats.duration_ms = start.elapsed().as_millis() as u64;
        messages.push(Message::info(format!(
            "Completed sync for {stream_name}: {} records in {} partitions",
            self.stats.records_synced, self.stats.partitions_synced
        )));
        info!(
            stream = stream_name,
            records = self.stats.records_synced,
            partitions = self.stats.partitions_synced,
            "sync complete"
        );

        Ok(messages)
    }
}

/// The maximum cursor value among `records`, in the configured comparison
/// domain, as the string the state store persists
fn extract_max_cursor(
    records: &[JsonValue],
    cursor_field: &str,
    format: CursorFormat,
) -> Option<String> {
    match format {
        CursorFormat::DateString => records
            .iter()
            .filter_map(|r| r.get(cursor_field)?.as_str().map(ToString::to_string))
            .max(),
        CursorFormat::Timestamp => records
            .iter()
            .filter_map(|r| {
                let value = r.get(cursor_field)?;
                value
                    .as_i64()
                    .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
            })
            .max()
            .map(|n| n.to_string()),
    }
}

#[cfg(test)]
mod tests;
